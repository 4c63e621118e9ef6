use crate::gate::{NorGate, NotGate};
use sim_core::{NodeId, Result, Simulator};

/// A composite gate that performs the OR function. Made from a NOR gate and a NOT gate.
#[derive(Clone, Debug)]
pub struct OrGate {
    /// One input node per pulled-down transistor pair, in construction order.
    pub input: Vec<NodeId>,
    /// The gate's single output node.
    pub output: NodeId,
}

impl OrGate {
    /// Constructs a new OR gate with the given number of inputs (which must be two or more).
    pub fn new(sim: &mut Simulator, num_inputs: usize) -> Result<Self> {
        let nor_gate = NorGate::new(sim, num_inputs)?;
        let not_gate = NotGate::new(sim)?;
        sim.connect(nor_gate.output, not_gate.input)?;

        Ok(OrGate {
            input: nor_gate.input,
            output: not_gate.output,
        })
    }
}
