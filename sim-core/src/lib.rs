//! A switch-level digital logic simulation engine. Circuits are built from single-terminal
//! devices (power rails, inputs, probes, passive ports) and three-terminal MOS transistors whose
//! source-drain channel is a bidirectional, gate-controlled switch. [`Simulator::tick`] resolves
//! every node to one of four logic values under IEEE-1800-style wired resolution, iterating
//! connected-component discovery and transistor re-evaluation to a fixed point.
//!
//! # Overview
//!
//! The simulator has two phases. During construction, an embedder allocates devices and
//! transistors with [`Simulator::create_vdd`]/[`Simulator::create_gnd`]/[`Simulator::create_input`]/
//! [`Simulator::create_probe`]/[`Simulator::create_port`]/[`Simulator::create_nmos`]/
//! [`Simulator::create_pmos`] and wires them with [`Simulator::connect`]. Calling
//! [`Simulator::build_topology`] freezes the circuit graph; after that, no more devices or wires
//! may be added, but [`Simulator::input_set`] and [`Simulator::tick`] become available, and
//! [`Simulator::probe_sample`] (or the more general [`Simulator::node_resolved_value`]) reads back
//! settled values.
//!
//! # Values
//!
//! [`LogicValue`] is the four-symbol algebra ([`resolve`], [`resolve_all`]) every node's value is
//! drawn from: `ZERO`, `ONE`, `X` (conflict/unknown), `Z` (high-impedance/undriven).
//!
//! # Errors
//!
//! Fallible entry points return [`SimError`] via the [`Result`] alias: malformed transistor wiring
//! at construction time, registration after [`Simulator::build_topology`], or a run-phase call
//! before it. A `tick` that fails to converge is not an error -- see [`TickOutcome::NonConvergent`].
#![deny(missing_docs)]

mod circuit;
mod device;
mod error;
mod node;
mod simulator;
mod solver;
mod topology;
mod transistor;
mod value;

pub use device::{Device, DeviceId, DeviceKind};
pub use error::{Result, SimError};
pub use node::{Node, NodeId, NodeKind};
pub use simulator::{
    DeviceHandle, InputHandle, ProbeHandle, Simulator, TickOutcome, TransistorHandle,
};
pub use transistor::{Transistor, TransistorId, TransistorKind};
pub use value::{resolve, resolve_all, resolve_mask, LogicValue};
