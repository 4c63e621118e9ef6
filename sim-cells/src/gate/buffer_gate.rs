use crate::gate::NotGate;
use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that performs the identity function. Made from two NOT gates.
#[derive(Clone, Copy, Debug)]
pub struct BufferGate {
    /// The gate's single input node.
    pub input: NodeId,
    /// The gate's single output node.
    pub output: NodeId,
}

impl BufferGate {
    /// Constructs a new buffer gate.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let first = NotGate::new(sim)?;
        let second = NotGate::new(sim)?;
        sim.connect(first.output, second.input)?;

        Ok(BufferGate {
            input: first.input,
            output: second.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn buffer_passes_value_through() {
        use LogicValue::*;
        for value in [Zero, One] {
            let mut sim = Simulator::new();
            let buffer = BufferGate::new(&mut sim).unwrap();
            let input = sim.create_input().unwrap();
            sim.connect(input.node(), buffer.input).unwrap();
            sim.build_topology().unwrap();
            sim.input_set(input, value).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(buffer.output).unwrap(), value);
        }
    }
}
