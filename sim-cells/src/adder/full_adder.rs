use crate::adder::HalfAdder;
use crate::gate::OrGate;
use sim_core::{NodeId, Result, Simulator};

/// A full adder circuit, made from two half adders and an OR gate. Adds two one-bit numbers in
/// the presence of a carry-in.
#[derive(Clone, Copy, Debug)]
pub struct FullAdder {
    /// First addend.
    pub a: NodeId,
    /// Second addend.
    pub b: NodeId,
    /// Carry input.
    pub carry_in: NodeId,
    /// Sum output.
    pub sum: NodeId,
    /// Carry output.
    pub carry: NodeId,
}

impl FullAdder {
    /// Constructs a new full adder.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let input_half_adder = HalfAdder::new(sim)?;
        let carry_half_adder = HalfAdder::new(sim)?;
        let or_gate = OrGate::new(sim, 2)?;

        sim.connect(input_half_adder.sum, carry_half_adder.b)?;
        sim.connect(carry_half_adder.carry, or_gate.input[0])?;
        sim.connect(input_half_adder.carry, or_gate.input[1])?;

        Ok(FullAdder {
            a: input_half_adder.a,
            b: input_half_adder.b,
            carry_in: carry_half_adder.a,
            sum: carry_half_adder.sum,
            carry: or_gate.output,
        })
    }
}
