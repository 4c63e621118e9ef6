use crate::node::NodeId;
use std::fmt;

/// A dense, monotonically allocated identifier for a [`Device`], distinct from [`crate::NodeId`]
/// and [`crate::TransistorId`] even though all three counters start at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub(crate) u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed semantics a single-terminal device applies to its terminal node's default value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Forces its terminal permanently to [`crate::LogicValue::One`].
    Vdd,
    /// Forces its terminal permanently to [`crate::LogicValue::Zero`].
    Gnd,
    /// A terminal the embedder may drive to any of the four values.
    Input,
    /// A read-only terminal; never drives anything itself.
    Probe,
    /// A passive join point; never drives anything itself.
    Port,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceKind::Vdd => "VDD",
            DeviceKind::Gnd => "GND",
            DeviceKind::Input => "Input",
            DeviceKind::Probe => "Probe",
            DeviceKind::Port => "Port",
        };
        write!(f, "{name}")
    }
}

/// A tagged, single-terminal owner of exactly one `BASE` node.
///
/// `Device` carries only structural information (its kind and its terminal); the default-value
/// semantics in [`DeviceKind`]'s documentation are applied once, at construction, by
/// [`crate::Simulator`].
#[derive(Clone, Copy, Debug)]
pub struct Device {
    id: DeviceId,
    kind: DeviceKind,
    terminal: NodeId,
}

impl Device {
    pub(crate) fn new(id: DeviceId, kind: DeviceKind, terminal: NodeId) -> Self {
        Device { id, kind, terminal }
    }

    /// The dense identifier of this device.
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Which kind of device this is.
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// The single `BASE` node this device owns.
    pub fn terminal(&self) -> NodeId {
        self.terminal
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} id={} terminal={}>",
            self.kind, self.id, self.terminal
        )
    }
}
