use crate::value::LogicValue;
use std::fmt;

/// A dense, monotonically allocated identifier for a [`Node`].
///
/// Node ids, device ids, and transistor ids are allocated from separate counters, so ids collide
/// *across* categories but never *within* one. Always used as a plain index into the arrays the
/// engine maintains internally; never dereferenced as a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distinguishes an ordinary electrical junction from a transistor's control terminal.
///
/// `BASE` nodes participate in wired resolution and may be a transistor source or drain. `GATE`
/// nodes additionally control the conductance of exactly one transistor -- see
/// [`crate::transistor::Transistor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An ordinary junction: device terminal, transistor source/drain, or passive port.
    Base,
    /// The control terminal of exactly one transistor.
    Gate,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Base => write!(f, "BASE"),
            NodeKind::Gate => write!(f, "GATE"),
        }
    }
}

/// A passive connection point in the circuit graph.
///
/// A `Node` holds the value it is being driven with by whichever device or transistor terminal
/// owns it (`default_value`) and the value the solver most recently settled it to
/// (`resolved_value`). Nodes never reference each other directly; all connectivity is expressed
/// as [`NodeId`] values held by wires, devices, and transistors.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    default_value: LogicValue,
    resolved_value: LogicValue,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind, default_value: LogicValue) -> Self {
        Node {
            id,
            kind,
            default_value,
            resolved_value: LogicValue::Z,
        }
    }

    /// The dense identifier of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Whether this is a `BASE` or `GATE` node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The value this node's owning device or transistor terminal is currently driving.
    pub fn default_value(&self) -> LogicValue {
        self.default_value
    }

    /// The value the solver last settled this node to. `Z` until the first `tick`.
    pub fn resolved_value(&self) -> LogicValue {
        self.resolved_value
    }

    pub(crate) fn set_default_value(&mut self, value: LogicValue) {
        self.default_value = value;
    }

    pub(crate) fn set_resolved_value(&mut self, value: LogicValue) {
        self.resolved_value = value;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Node id={} kind={} default_value={} resolved_value={}>",
            self.id, self.kind, self.default_value, self.resolved_value
        )
    }
}
