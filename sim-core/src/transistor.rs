use crate::node::NodeId;
use crate::value::LogicValue;
use std::fmt;

/// A dense, monotonically allocated identifier for a [`Transistor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransistorId(pub(crate) u32);

impl fmt::Display for TransistorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which gate value makes a transistor's channel conduct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransistorKind {
    /// Conducts while its gate reads [`LogicValue::One`].
    Nmos,
    /// Conducts while its gate reads [`LogicValue::Zero`].
    Pmos,
}

impl fmt::Display for TransistorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransistorKind::Nmos => "NMOS",
            TransistorKind::Pmos => "PMOS",
        };
        write!(f, "{name}")
    }
}

/// A three-terminal, gate-controlled bidirectional switch between `source` and `drain`.
///
/// `source` and `drain` are interchangeable: the channel has no preferred direction, and the
/// solver treats a conducting transistor as an undirected edge. Conductance is a pure function of
/// the gate's most recently resolved value -- see [`Transistor::is_conducting`].
#[derive(Clone, Copy, Debug)]
pub struct Transistor {
    id: TransistorId,
    kind: TransistorKind,
    gate: NodeId,
    source: NodeId,
    drain: NodeId,
}

impl Transistor {
    pub(crate) fn new(
        id: TransistorId,
        kind: TransistorKind,
        gate: NodeId,
        source: NodeId,
        drain: NodeId,
    ) -> Self {
        Transistor {
            id,
            kind,
            gate,
            source,
            drain,
        }
    }

    /// The dense identifier of this transistor.
    pub fn id(&self) -> TransistorId {
        self.id
    }

    /// Whether this is an `NMOS` or `PMOS` transistor.
    pub fn kind(&self) -> TransistorKind {
        self.kind
    }

    /// The `GATE` node controlling this transistor's conductance.
    pub fn gate(&self) -> NodeId {
        self.gate
    }

    /// One terminal of the channel. Interchangeable with [`Transistor::drain`].
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The other terminal of the channel. Interchangeable with [`Transistor::source`].
    pub fn drain(&self) -> NodeId {
        self.drain
    }

    /// Whether this transistor conducts given its gate's currently resolved value.
    ///
    /// `X` and `Z` never conduct, for either kind: an unknown or floating gate leaves the channel
    /// open.
    pub fn is_conducting(&self, gate_value: LogicValue) -> bool {
        match self.kind {
            TransistorKind::Nmos => gate_value == LogicValue::One,
            TransistorKind::Pmos => gate_value == LogicValue::Zero,
        }
    }
}

impl fmt::Display for Transistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} id={} gate={} source={} drain={}>",
            self.kind, self.id, self.gate, self.source, self.drain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId as NId;

    fn transistor(kind: TransistorKind) -> Transistor {
        Transistor::new(TransistorId(0), kind, NId::new_for_test(0), NId::new_for_test(1), NId::new_for_test(2))
    }

    #[test]
    fn nmos_conducts_only_on_one() {
        let t = transistor(TransistorKind::Nmos);
        assert!(t.is_conducting(LogicValue::One));
        assert!(!t.is_conducting(LogicValue::Zero));
        assert!(!t.is_conducting(LogicValue::X));
        assert!(!t.is_conducting(LogicValue::Z));
    }

    #[test]
    fn pmos_conducts_only_on_zero() {
        let t = transistor(TransistorKind::Pmos);
        assert!(!t.is_conducting(LogicValue::One));
        assert!(t.is_conducting(LogicValue::Zero));
        assert!(!t.is_conducting(LogicValue::X));
        assert!(!t.is_conducting(LogicValue::Z));
    }

    #[test]
    fn display_contains_all_terminals() {
        let t = transistor(TransistorKind::Pmos);
        let text = t.to_string();
        assert!(text.starts_with("<PMOS"));
        assert!(text.contains("gate=0"));
        assert!(text.contains("source=1"));
        assert!(text.contains("drain=2"));
    }
}
