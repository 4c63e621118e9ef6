mod full_adder;
mod half_adder;
mod ripple_carry_adder;

pub use full_adder::FullAdder;
pub use half_adder::HalfAdder;
pub use ripple_carry_adder::RippleCarryAdder;
