use crate::adder::FullAdder;
use sim_core::{LogicValue, NodeId, Result, Simulator};

/// A simple and slow device that adds two n-bit unsigned integers, built from a chain of full
/// adders.
#[derive(Clone, Debug)]
pub struct RippleCarryAdder {
    /// Least-significant-bit-first addend A.
    pub input_a: Vec<NodeId>,
    /// Least-significant-bit-first addend B.
    pub input_b: Vec<NodeId>,
    /// Least-significant-bit-first sum.
    pub sum: Vec<NodeId>,
    /// Carry out of the most significant bit.
    pub overflow: NodeId,
}

impl RippleCarryAdder {
    /// Constructs a new ripple-carry adder of the given width (which must be non-zero).
    pub fn new(sim: &mut Simulator, width: usize) -> Result<Self> {
        assert!(width > 0, "RippleCarryAdder width must be non-zero");

        let gnd = sim.create_gnd()?;
        let adders: Vec<FullAdder> = (0..width)
            .map(|_| FullAdder::new(sim))
            .collect::<Result<_>>()?;

        sim.connect(gnd.node(), adders[0].carry_in)?;
        for pair in adders.windows(2) {
            sim.connect(pair[0].carry, pair[1].carry_in)?;
        }

        Ok(RippleCarryAdder {
            input_a: adders.iter().map(|a| a.a).collect(),
            input_b: adders.iter().map(|a| a.b).collect(),
            sum: adders.iter().map(|a| a.sum).collect(),
            overflow: adders.last().unwrap().carry,
        })
    }
}
