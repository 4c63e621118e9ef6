use crate::gate::NotGate;
use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that performs the XOR function.
#[derive(Clone, Copy, Debug)]
pub struct XorGate {
    /// The first input node.
    pub a_input: NodeId,
    /// The second input node.
    pub b_input: NodeId,
    /// The gate's single output node.
    pub output: NodeId,
}

impl XorGate {
    /// Constructs a new 2-input XOR gate.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let vdd = sim.create_vdd()?;
        let gnd = sim.create_gnd()?;
        let a_not_gate = NotGate::new(sim)?;
        let b_not_gate = NotGate::new(sim)?;

        let a_pmos = sim.create_pmos()?;
        let b_inverted_pmos = sim.create_pmos()?;
        let a_nmos = sim.create_nmos()?;
        let b_nmos_1 = sim.create_nmos()?;

        let a_inverted_pmos = sim.create_pmos()?;
        let b_pmos = sim.create_pmos()?;
        let a_inverted_nmos = sim.create_nmos()?;
        let b_nmos_2 = sim.create_nmos()?;

        let a_input = a_not_gate.input;
        let b_input = b_not_gate.input;

        // Branch driving output true when exactly one of a, !b is asserted.
        sim.connect(vdd.node(), a_pmos.source())?;
        sim.connect(a_pmos.drain(), b_inverted_pmos.source())?;
        sim.connect(b_inverted_pmos.drain(), a_nmos.drain())?;
        sim.connect(a_nmos.source(), b_nmos_1.drain())?;
        sim.connect(b_nmos_1.source(), gnd.node())?;

        sim.connect(a_pmos.gate(), a_not_gate.output)?;
        sim.connect(b_inverted_pmos.gate(), b_input)?;
        sim.connect(a_nmos.gate(), a_input)?;
        sim.connect(b_nmos_1.gate(), b_input)?;

        // Dual branch driving the same output when exactly one of !a, b is asserted.
        sim.connect(vdd.node(), a_inverted_pmos.source())?;
        sim.connect(a_inverted_pmos.drain(), b_pmos.source())?;
        sim.connect(b_pmos.drain(), a_inverted_nmos.drain())?;
        sim.connect(a_inverted_nmos.source(), b_nmos_2.drain())?;
        sim.connect(b_nmos_2.source(), gnd.node())?;

        sim.connect(a_inverted_pmos.gate(), a_input)?;
        sim.connect(b_pmos.gate(), b_not_gate.output)?;
        sim.connect(a_inverted_nmos.gate(), a_not_gate.output)?;
        sim.connect(b_nmos_2.gate(), b_not_gate.output)?;

        sim.connect(a_nmos.drain(), a_inverted_nmos.drain())?;

        Ok(XorGate {
            a_input,
            b_input,
            output: a_nmos.drain(),
        })
    }
}
