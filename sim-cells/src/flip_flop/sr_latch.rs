use crate::gate::NorGate;
use sim_core::{NodeId, Result, Simulator};

/// Two cross-coupled NOR gates, the classic switch-level topology for an SR latch.
///
/// On real hardware this circuit retains its last driven state once both inputs are released.
/// This simulator does not carry resolved values across ticks -- every [`Simulator::tick`]
/// reseeds each node from its device's default value before resolving -- so releasing both `set`
/// and `reset` does not hold the previous output. With both inputs low, neither cross-coupled
/// net has a conducting pull-up or pull-down, and the outputs float to `Z` rather than retaining
/// their last value.
#[derive(Clone, Copy, Debug)]
pub struct SrLatch {
    /// Set input: driving this high (with reset low) forces `output` high.
    pub set: NodeId,
    /// Reset input: driving this high (with set low) forces `output` low.
    pub reset: NodeId,
    /// The latch's primary output.
    pub output: NodeId,
    /// The complement of `output`.
    pub output_inverted: NodeId,
}

impl SrLatch {
    /// Constructs a new SR latch.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let nor_gate_1 = NorGate::new(sim, 2)?;
        let nor_gate_2 = NorGate::new(sim, 2)?;

        sim.connect(nor_gate_1.output, nor_gate_2.input[0])?;
        sim.connect(nor_gate_2.output, nor_gate_1.input[1])?;

        Ok(SrLatch {
            reset: nor_gate_1.input[0],
            set: nor_gate_2.input[1],
            output: nor_gate_1.output,
            output_inverted: nor_gate_2.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn set_and_reset_drive_complementary_outputs() {
        let mut sim = Simulator::new();
        let latch = SrLatch::new(&mut sim).unwrap();
        let set = sim.create_input().unwrap();
        let reset = sim.create_input().unwrap();
        sim.connect(set.node(), latch.set).unwrap();
        sim.connect(reset.node(), latch.reset).unwrap();
        sim.build_topology().unwrap();

        for _ in 0..3 {
            sim.input_set(set, LogicValue::One).unwrap();
            sim.input_set(reset, LogicValue::Zero).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(latch.output).unwrap(), LogicValue::One);
            assert_eq!(
                sim.node_resolved_value(latch.output_inverted).unwrap(),
                LogicValue::Zero
            );

            sim.input_set(set, LogicValue::Zero).unwrap();
            sim.input_set(reset, LogicValue::One).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(latch.output).unwrap(), LogicValue::Zero);
            assert_eq!(
                sim.node_resolved_value(latch.output_inverted).unwrap(),
                LogicValue::One
            );
        }
    }

    #[test]
    fn releasing_both_inputs_floats_instead_of_holding() {
        let mut sim = Simulator::new();
        let latch = SrLatch::new(&mut sim).unwrap();
        let set = sim.create_input().unwrap();
        let reset = sim.create_input().unwrap();
        sim.connect(set.node(), latch.set).unwrap();
        sim.connect(reset.node(), latch.reset).unwrap();
        sim.build_topology().unwrap();

        sim.input_set(set, LogicValue::One).unwrap();
        sim.input_set(reset, LogicValue::Zero).unwrap();
        sim.tick().unwrap();
        assert_eq!(sim.node_resolved_value(latch.output).unwrap(), LogicValue::One);

        sim.input_set(set, LogicValue::Zero).unwrap();
        sim.tick().unwrap();
        assert_eq!(sim.node_resolved_value(latch.output).unwrap(), LogicValue::Z);
        assert_eq!(
            sim.node_resolved_value(latch.output_inverted).unwrap(),
            LogicValue::Z
        );
    }
}
