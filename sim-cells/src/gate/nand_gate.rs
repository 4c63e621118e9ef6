use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that performs the NAND function.
///
/// The pull-down network is `num_inputs` NMOS transistors chained in series (output only pulled
/// low when every input is high); the pull-up network is the dual, `num_inputs` PMOS transistors
/// in parallel (output pulled high as soon as any input is low).
#[derive(Clone, Debug)]
pub struct NandGate {
    /// One input node per transistor pair, in construction order.
    pub input: Vec<NodeId>,
    /// The gate's single output node.
    pub output: NodeId,
}

impl NandGate {
    /// Constructs a new NAND gate with the given number of inputs (which must be two or more).
    pub fn new(sim: &mut Simulator, num_inputs: usize) -> Result<Self> {
        assert!(num_inputs >= 2, "NAND gate must have two or more inputs");

        let vdd = sim.create_vdd()?;
        let gnd = sim.create_gnd()?;

        let pmos: Vec<_> = (0..num_inputs)
            .map(|_| sim.create_pmos())
            .collect::<Result<_>>()?;
        let nmos: Vec<_> = (0..num_inputs)
            .map(|_| sim.create_nmos())
            .collect::<Result<_>>()?;

        // All pmos sources tied high -- the pull-up network is parallel.
        for p in &pmos {
            sim.connect(vdd.node(), p.source())?;
        }
        // All pmos drains tied together at the output.
        for p in &pmos[1..] {
            sim.connect(p.drain(), pmos[0].drain())?;
        }

        // The nmos pull-down network is a series chain; the first source ties to ground.
        sim.connect(gnd.node(), nmos[0].source())?;
        for pair in nmos.windows(2) {
            sim.connect(pair[0].drain(), pair[1].source())?;
        }
        sim.connect(nmos[num_inputs - 1].drain(), pmos[0].drain())?;

        let mut input = Vec::with_capacity(num_inputs);
        for (n, p) in nmos.iter().zip(pmos.iter()) {
            sim.connect(n.gate(), p.gate())?;
            input.push(n.gate());
        }

        Ok(NandGate {
            input,
            output: pmos[0].drain(),
        })
    }
}
