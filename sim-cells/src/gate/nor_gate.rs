use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that performs the NOR function.
///
/// The pull-down network is `num_inputs` NMOS transistors in parallel (output pulled low as soon
/// as any input is high); the pull-up network is the dual, `num_inputs` PMOS transistors chained
/// in series (output only pulled high when every input is low).
#[derive(Clone, Debug)]
pub struct NorGate {
    /// One input node per transistor pair, in construction order.
    pub input: Vec<NodeId>,
    /// The gate's single output node.
    pub output: NodeId,
}

impl NorGate {
    /// Constructs a new NOR gate with the given number of inputs (which must be two or more).
    pub fn new(sim: &mut Simulator, num_inputs: usize) -> Result<Self> {
        assert!(num_inputs >= 2, "NOR gate must have two or more inputs");

        let vdd = sim.create_vdd()?;
        let gnd = sim.create_gnd()?;

        let nmos: Vec<_> = (0..num_inputs)
            .map(|_| sim.create_nmos())
            .collect::<Result<_>>()?;
        let pmos: Vec<_> = (0..num_inputs)
            .map(|_| sim.create_pmos())
            .collect::<Result<_>>()?;

        // All nmos sources tied low -- the pull-down network is parallel.
        for n in &nmos {
            sim.connect(gnd.node(), n.source())?;
        }
        // All nmos drains tied together at the output.
        for n in &nmos[1..] {
            sim.connect(n.drain(), nmos[0].drain())?;
        }

        // The pmos pull-up network is a series chain; the first source ties to power.
        sim.connect(vdd.node(), pmos[0].source())?;
        for pair in pmos.windows(2) {
            sim.connect(pair[0].drain(), pair[1].source())?;
        }
        sim.connect(pmos[num_inputs - 1].drain(), nmos[0].drain())?;

        let mut input = Vec::with_capacity(num_inputs);
        for (n, p) in nmos.iter().zip(pmos.iter()) {
            sim.connect(n.gate(), p.gate())?;
            input.push(n.gate());
        }

        Ok(NorGate {
            input,
            output: nmos[0].drain(),
        })
    }
}
