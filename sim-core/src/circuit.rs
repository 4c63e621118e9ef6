use crate::device::{Device, DeviceId, DeviceKind};
use crate::error::{Result, SimError};
use crate::node::{Node, NodeId, NodeKind};
use crate::transistor::{Transistor, TransistorId, TransistorKind};
use crate::value::LogicValue;
use std::collections::HashMap;

/// The value-typed store of everything registered in a circuit: nodes, devices, transistors, and
/// wires.
///
/// `Circuit` performs no simulation of its own -- it is an arena plus the bookkeeping structures
/// (`wire_index`, `gate_to_transistor`) the topology builder and solver need to stay fast. Nodes,
/// devices, and transistors are append-only: ids are handed out by [`crate::Simulator`]'s id
/// allocator and registered here in order, so every id is dense in `[0, N)` within its category.
#[derive(Debug, Default)]
pub(crate) struct Circuit {
    nodes: Vec<Node>,
    devices: Vec<Device>,
    transistors: Vec<Transistor>,
    wires: Vec<(NodeId, NodeId)>,
    wire_index: HashMap<(NodeId, NodeId), usize>,
    gate_to_transistor: Vec<Option<TransistorId>>,
}

fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Circuit {
    pub(crate) fn new() -> Self {
        Circuit::default()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn transistor_count(&self) -> usize {
        self.transistors.len()
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub(crate) fn device(&self, id: DeviceId) -> &Device {
        &self.devices[id.0 as usize]
    }

    pub(crate) fn transistors(&self) -> &[Transistor] {
        &self.transistors
    }

    pub(crate) fn wires(&self) -> &[(NodeId, NodeId)] {
        &self.wires
    }

    pub(crate) fn gate_owner(&self, node: NodeId) -> Option<TransistorId> {
        self.gate_to_transistor.get(node.index()).copied().flatten()
    }

    /// Registers a freshly allocated node. `id` must equal `self.nodes.len()` (dense allocation is
    /// the caller's responsibility).
    pub(crate) fn register_node(&mut self, id: NodeId, kind: NodeKind, default_value: LogicValue) {
        debug_assert_eq!(id.index(), self.nodes.len(), "node ids must be dense");
        self.nodes.push(Node::new(id, kind, default_value));
        self.gate_to_transistor.push(None);
    }

    /// Registers a freshly allocated device terminating at `terminal`.
    pub(crate) fn register_device(&mut self, id: DeviceId, kind: DeviceKind, terminal: NodeId) {
        debug_assert_eq!(id.0 as usize, self.devices.len(), "device ids must be dense");
        self.devices.push(Device::new(id, kind, terminal));
    }

    /// Registers a transistor over three existing nodes, validating invariant 3 (pairwise
    /// distinctness and node kind) and invariant 4 (a gate drives at most one transistor).
    pub(crate) fn register_transistor(
        &mut self,
        id: TransistorId,
        kind: TransistorKind,
        gate: NodeId,
        source: NodeId,
        drain: NodeId,
    ) -> Result<TransistorId> {
        if self.node(gate).kind() != NodeKind::Gate {
            return Err(SimError::wrong_kind(gate, "GATE"));
        }
        if self.node(source).kind() != NodeKind::Base {
            return Err(SimError::wrong_kind(source, "BASE"));
        }
        if self.node(drain).kind() != NodeKind::Base {
            return Err(SimError::wrong_kind(drain, "BASE"));
        }
        if gate == source {
            return Err(SimError::coincident_terminals(gate, source));
        }
        if gate == drain {
            return Err(SimError::coincident_terminals(gate, drain));
        }
        if source == drain {
            return Err(SimError::coincident_terminals(source, drain));
        }
        if self.gate_owner(gate).is_some() {
            return Err(SimError::gate_already_assigned(gate));
        }

        debug_assert_eq!(id.0 as usize, self.transistors.len(), "transistor ids must be dense");
        self.transistors
            .push(Transistor::new(id, kind, gate, source, drain));
        self.gate_to_transistor[gate.index()] = Some(id);
        Ok(id)
    }

    /// Records an undirected wire between `a` and `b`. Self-wires and duplicate wires are no-ops.
    pub(crate) fn connect(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let key = canonical_pair(a, b);
        if self.wire_index.contains_key(&key) {
            return;
        }
        self.wire_index.insert(key, self.wires.len());
        self.wires.push(key);
    }

    /// Removes the wire between `a` and `b`, if any, by swap-pop, fixing up the moved entry's
    /// index.
    pub(crate) fn disconnect(&mut self, a: NodeId, b: NodeId) {
        let key = canonical_pair(a, b);
        let Some(&pos) = self.wire_index.get(&key) else {
            return;
        };
        self.wire_index.remove(&key);
        let last = self.wires.len() - 1;
        self.wires.swap(pos, last);
        self.wires.pop();
        if pos < self.wires.len() {
            let moved = self.wires[pos];
            self.wire_index.insert(moved, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(circuit: &mut Circuit, default_value: LogicValue) -> NodeId {
        let id = NodeId::new_for_test(circuit.node_count() as u32);
        circuit.register_node(id, NodeKind::Base, default_value);
        id
    }

    fn gate(circuit: &mut Circuit) -> NodeId {
        let id = NodeId::new_for_test(circuit.node_count() as u32);
        circuit.register_node(id, NodeKind::Gate, LogicValue::Z);
        id
    }

    #[test]
    fn connect_dedups_and_ignores_self_wires() {
        let mut circuit = Circuit::new();
        let a = base(&mut circuit, LogicValue::Z);
        let b = base(&mut circuit, LogicValue::Z);

        circuit.connect(a, a);
        assert!(circuit.wires().is_empty());

        circuit.connect(a, b);
        circuit.connect(b, a);
        assert_eq!(circuit.wires().len(), 1);
    }

    #[test]
    fn disconnect_after_connect_is_empty() {
        let mut circuit = Circuit::new();
        let a = base(&mut circuit, LogicValue::Z);
        let b = base(&mut circuit, LogicValue::Z);
        let c = base(&mut circuit, LogicValue::Z);

        circuit.connect(a, b);
        circuit.connect(b, c);
        circuit.disconnect(a, b);

        assert_eq!(circuit.wires().len(), 1);
        assert_eq!(circuit.wires()[0], canonical_pair(b, c));
    }

    #[test]
    fn register_transistor_rejects_wrong_kinds_and_coincident_terminals() {
        let mut circuit = Circuit::new();
        let g = gate(&mut circuit);
        let s = base(&mut circuit, LogicValue::Z);
        let d = base(&mut circuit, LogicValue::Z);

        // source used as gate -> wrong kind.
        let err = circuit
            .register_transistor(TransistorId(0), TransistorKind::Nmos, s, s, d)
            .unwrap_err();
        assert!(matches!(err, SimError::Construction(_)));

        // gate used twice as gate and source -> coincident terminals.
        let err = circuit
            .register_transistor(TransistorId(0), TransistorKind::Nmos, g, g, d)
            .unwrap_err();
        assert!(matches!(err, SimError::Construction(_)));

        circuit
            .register_transistor(TransistorId(0), TransistorKind::Nmos, g, s, d)
            .unwrap();
    }

    #[test]
    fn register_transistor_rejects_shared_gate() {
        let mut circuit = Circuit::new();
        let g = gate(&mut circuit);
        let s1 = base(&mut circuit, LogicValue::Z);
        let d1 = base(&mut circuit, LogicValue::Z);
        let s2 = base(&mut circuit, LogicValue::Z);
        let d2 = base(&mut circuit, LogicValue::Z);

        circuit
            .register_transistor(TransistorId(0), TransistorKind::Nmos, g, s1, d1)
            .unwrap();
        let err = circuit
            .register_transistor(TransistorId(1), TransistorKind::Pmos, g, s2, d2)
            .unwrap_err();
        assert!(matches!(err, SimError::Construction(_)));
    }
}
