use crate::gate::NotGate;
use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that performs the XNOR function.
#[derive(Clone, Copy, Debug)]
pub struct XnorGate {
    /// The first input node.
    pub a_input: NodeId,
    /// The second input node.
    pub b_input: NodeId,
    /// The gate's single output node.
    pub output: NodeId,
}

impl XnorGate {
    /// Constructs a new 2-input XNOR gate.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let vdd = sim.create_vdd()?;
        let gnd = sim.create_gnd()?;
        let a_not_gate = NotGate::new(sim)?;
        let b_not_gate = NotGate::new(sim)?;

        let a_pmos = sim.create_pmos()?;
        let b_pmos = sim.create_pmos()?;
        let a_nmos = sim.create_nmos()?;
        let b_inverted_nmos = sim.create_nmos()?;

        let a_inverted_pmos = sim.create_pmos()?;
        let b_inverted_pmos = sim.create_pmos()?;
        let a_inverted_nmos = sim.create_nmos()?;
        let b_nmos = sim.create_nmos()?;

        let a_input = a_not_gate.input;
        let b_input = b_not_gate.input;

        // Branch driving output true when both a and b are asserted.
        sim.connect(vdd.node(), a_pmos.source())?;
        sim.connect(a_pmos.drain(), b_pmos.source())?;
        sim.connect(b_pmos.drain(), a_nmos.drain())?;
        sim.connect(a_nmos.source(), b_inverted_nmos.drain())?;
        sim.connect(b_inverted_nmos.source(), gnd.node())?;

        sim.connect(a_pmos.gate(), a_input)?;
        sim.connect(b_pmos.gate(), b_input)?;
        sim.connect(a_nmos.gate(), a_input)?;
        sim.connect(b_inverted_nmos.gate(), b_not_gate.output)?;

        // Dual branch driving the same output when neither a nor b is asserted.
        sim.connect(vdd.node(), a_inverted_pmos.source())?;
        sim.connect(a_inverted_pmos.drain(), b_inverted_pmos.source())?;
        sim.connect(b_inverted_pmos.drain(), a_inverted_nmos.drain())?;
        sim.connect(a_inverted_nmos.source(), b_nmos.drain())?;
        sim.connect(b_nmos.source(), gnd.node())?;

        sim.connect(a_inverted_pmos.gate(), a_not_gate.output)?;
        sim.connect(b_inverted_pmos.gate(), b_not_gate.output)?;
        sim.connect(a_inverted_nmos.gate(), a_not_gate.output)?;
        sim.connect(b_nmos.gate(), b_input)?;

        sim.connect(a_nmos.drain(), a_inverted_nmos.drain())?;

        Ok(XnorGate {
            a_input,
            b_input,
            output: a_nmos.drain(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn xnor_truth_table() {
        use LogicValue::*;
        for (a, b, expected) in [
            (Zero, Zero, One),
            (Zero, One, Zero),
            (One, Zero, Zero),
            (One, One, One),
        ] {
            let mut sim = Simulator::new();
            let gate = XnorGate::new(&mut sim).unwrap();
            let in_a = sim.create_input().unwrap();
            let in_b = sim.create_input().unwrap();
            sim.connect(in_a.node(), gate.a_input).unwrap();
            sim.connect(in_b.node(), gate.b_input).unwrap();
            sim.build_topology().unwrap();
            sim.input_set(in_a, a).unwrap();
            sim.input_set(in_b, b).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(gate.output).unwrap(), expected);
        }
    }
}
