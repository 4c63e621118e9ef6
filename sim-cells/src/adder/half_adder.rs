use crate::gate::{AndGate, XorGate};
use sim_core::{NodeId, Result, Simulator};

/// A half adder circuit. Adds two one-bit numbers and outputs their sum, with a carry output.
#[derive(Clone, Copy, Debug)]
pub struct HalfAdder {
    /// First addend.
    pub a: NodeId,
    /// Second addend.
    pub b: NodeId,
    /// Sum output.
    pub sum: NodeId,
    /// Carry output.
    pub carry: NodeId,
}

impl HalfAdder {
    /// Constructs a new half adder.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let and_gate = AndGate::new(sim, 2)?;
        let xor_gate = XorGate::new(sim)?;

        sim.connect(and_gate.input[0], xor_gate.a_input)?;
        sim.connect(and_gate.input[1], xor_gate.b_input)?;

        Ok(HalfAdder {
            a: xor_gate.a_input,
            b: xor_gate.b_input,
            sum: xor_gate.output,
            carry: and_gate.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn half_adder_truth_table() {
        use LogicValue::*;
        for (a, b, sum, carry) in [
            (Zero, Zero, Zero, Zero),
            (Zero, One, One, Zero),
            (One, Zero, One, Zero),
            (One, One, Zero, One),
        ] {
            let mut sim = Simulator::new();
            let adder = HalfAdder::new(&mut sim).unwrap();
            let in_a = sim.create_input().unwrap();
            let in_b = sim.create_input().unwrap();
            sim.connect(in_a.node(), adder.a).unwrap();
            sim.connect(in_b.node(), adder.b).unwrap();
            sim.build_topology().unwrap();
            sim.input_set(in_a, a).unwrap();
            sim.input_set(in_b, b).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(adder.sum).unwrap(), sum);
            assert_eq!(sim.node_resolved_value(adder.carry).unwrap(), carry);
        }
    }
}
