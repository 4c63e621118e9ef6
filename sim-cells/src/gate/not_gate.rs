use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that performs the NOT function.
#[derive(Clone, Copy, Debug)]
pub struct NotGate {
    /// The gate's single input node.
    pub input: NodeId,
    /// The gate's single output node.
    pub output: NodeId,
}

impl NotGate {
    /// Wires a new NOT gate into `sim`: a PMOS pulling the output high and an NMOS pulling it low,
    /// gates tied together as the input.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let vdd = sim.create_vdd()?;
        let gnd = sim.create_gnd()?;
        let nmos = sim.create_nmos()?;
        let pmos = sim.create_pmos()?;

        sim.connect(nmos.gate(), pmos.gate())?;
        sim.connect(nmos.drain(), pmos.drain())?;
        sim.connect(gnd.node(), nmos.source())?;
        sim.connect(vdd.node(), pmos.source())?;

        Ok(NotGate {
            input: nmos.gate(),
            output: nmos.drain(),
        })
    }
}
