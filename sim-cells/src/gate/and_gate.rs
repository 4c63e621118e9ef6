use crate::gate::{NandGate, NotGate};
use sim_core::{NodeId, Result, Simulator};

/// A composite gate that performs the AND function. Made from a NAND gate and a NOT gate.
#[derive(Clone, Debug)]
pub struct AndGate {
    /// One input node per pulled-down transistor pair, in construction order.
    pub input: Vec<NodeId>,
    /// The gate's single output node.
    pub output: NodeId,
}

impl AndGate {
    /// Constructs a new AND gate with the given number of inputs (which must be two or more).
    pub fn new(sim: &mut Simulator, num_inputs: usize) -> Result<Self> {
        let nand_gate = NandGate::new(sim, num_inputs)?;
        let not_gate = NotGate::new(sim)?;
        sim.connect(nand_gate.output, not_gate.input)?;

        Ok(AndGate {
            input: nand_gate.input,
            output: not_gate.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn two_input_and_truth_table() {
        use LogicValue::*;
        for (a, b, expected) in [
            (Zero, Zero, Zero),
            (Zero, One, Zero),
            (One, Zero, Zero),
            (One, One, One),
        ] {
            let mut sim = Simulator::new();
            let gate = AndGate::new(&mut sim, 2).unwrap();
            let in_a = sim.create_input().unwrap();
            let in_b = sim.create_input().unwrap();
            sim.connect(in_a.node(), gate.input[0]).unwrap();
            sim.connect(in_b.node(), gate.input[1]).unwrap();
            sim.build_topology().unwrap();
            sim.input_set(in_a, a).unwrap();
            sim.input_set(in_b, b).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(gate.output).unwrap(), expected);
        }
    }
}
