//! A library of composite circuits built by wiring `sim-core` primitives together: logic gates,
//! adders, a latch, and a ring oscillator.
//!
//! Nothing in here reaches into `sim-core`'s internals; every circuit is assembled through the
//! same public [`Simulator`](sim_core::Simulator) API an embedder would use.
#![deny(missing_docs)]

mod adder;
mod flip_flop;
mod gate;
mod ring_oscillator;

pub use adder::{FullAdder, HalfAdder, RippleCarryAdder};
pub use flip_flop::SrLatch;
pub use gate::{
    AndGate, BufferGate, NandGate, NorGate, NotGate, OrGate, TriStateBufferGate, XnorGate, XorGate,
};
pub use ring_oscillator::{is_oscillating, RingOscillator};
