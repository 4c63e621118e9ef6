use crate::node::NodeId;
use thiserror::Error;

/// The errors the core engine can raise.
///
/// Each variant corresponds to one of the failure kinds the engine distinguishes: a malformed
/// transistor at construction time, an attempt to mutate topology after [`crate::Simulator::build_topology`]
/// has frozen it, or a run-phase call made before the topology was ever frozen. A non-convergent
/// `tick` is deliberately *not* represented here -- see [`crate::TickOutcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A transistor or device was constructed with an invalid terminal: a gate that isn't
    /// `GATE`-kind, a source/drain that isn't `BASE`-kind, a gate already owned by another
    /// transistor, or two terminals that name the same node.
    #[error("invalid transistor construction: {0}")]
    Construction(String),

    /// An attempt was made to mutate the circuit (add a device/transistor, connect, or
    /// disconnect) after [`crate::Simulator::build_topology`] froze the topology.
    #[error("circuit topology is frozen after build_topology; no further registration is allowed")]
    Registration,

    /// `tick` or `probe_sample` (or any other run-phase call) was made before
    /// [`crate::Simulator::build_topology`] was ever called.
    #[error("build_topology must be called before the simulator can be run")]
    UseBeforeBuild,
}

impl SimError {
    /// Builds a [`SimError::Construction`] complaining that `node` is not of the expected kind.
    pub(crate) fn wrong_kind(node: NodeId, expected: &str) -> Self {
        SimError::Construction(format!("node {node} is not {expected}-kind"))
    }

    /// Builds a [`SimError::Construction`] complaining that two terminals coincide.
    pub(crate) fn coincident_terminals(a: NodeId, b: NodeId) -> Self {
        SimError::Construction(format!("terminals {a} and {b} must be distinct nodes"))
    }

    /// Builds a [`SimError::Construction`] complaining that a gate node already drives another
    /// transistor.
    pub(crate) fn gate_already_assigned(node: NodeId) -> Self {
        SimError::Construction(format!("gate node {node} already belongs to another transistor"))
    }
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, SimError>;
