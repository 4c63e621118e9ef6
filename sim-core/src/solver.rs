use crate::circuit::Circuit;
use crate::node::NodeId;
use crate::topology::Topology;
use crate::value::resolve_mask;

/// Scratch buffers for one round of connected-component discovery and wired-OR resolution.
///
/// Reused across every solver iteration within a `tick` (and across ticks) so a long-running
/// simulation does no allocation once warmed up: `compute_components` clears and refills
/// `visited`/`component_of`/`components` in place rather than reallocating them.
#[derive(Debug, Default)]
pub(crate) struct Solver {
    visited: Vec<bool>,
    component_of: Vec<u32>,
    components: Vec<Vec<NodeId>>,
    stack: Vec<NodeId>,
    changed_nodes: Vec<NodeId>,
}

const NO_COMPONENT: u32 = u32::MAX;

impl Solver {
    pub(crate) fn new() -> Self {
        Solver::default()
    }

    /// Partitions every node into connected components, using `topology`'s static and dynamic
    /// adjacency. Explicit-stack DFS: circuits with thousand-node chains must not blow the call
    /// stack.
    pub(crate) fn compute_components(&mut self, topology: &Topology) {
        let n = topology.node_count();
        self.visited.clear();
        self.visited.resize(n, false);
        self.component_of.clear();
        self.component_of.resize(n, NO_COMPONENT);
        self.components.clear();
        self.stack.clear();

        for start in 0..n {
            if self.visited[start] {
                continue;
            }
            let component_index = self.components.len() as u32;
            let mut members = Vec::new();
            self.stack.push(NodeId::from_index(start));
            self.visited[start] = true;

            while let Some(node) = self.stack.pop() {
                self.component_of[node.index()] = component_index;
                members.push(node);
                let mut neighbors = Vec::new();
                topology.neighbors_into(node, &mut neighbors);
                for neighbor in neighbors {
                    if !self.visited[neighbor.index()] {
                        self.visited[neighbor.index()] = true;
                        self.stack.push(neighbor);
                    }
                }
            }
            self.components.push(members);
        }
    }

    /// Resolves every component's wired-OR value from its members' `default_value`s and writes the
    /// result back to each member's `resolved_value`.
    ///
    /// Returns the nodes whose `resolved_value` changed, so callers can detect a fixed point
    /// without a separate comparison pass, and know exactly which nodes to force to `X` if the
    /// iteration cap is reached without settling.
    pub(crate) fn resolve_and_check(&mut self, circuit: &mut Circuit) -> &[NodeId] {
        self.changed_nodes.clear();
        for component in &self.components {
            let mut mask: u8 = 0;
            for &node in component {
                mask |= circuit.node(node).default_value() as u8;
            }
            let resolved = resolve_mask(mask);
            for &node in component {
                if circuit.node(node).resolved_value() != resolved {
                    self.changed_nodes.push(node);
                }
                circuit.node_mut(node).set_resolved_value(resolved);
            }
        }
        &self.changed_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::value::LogicValue;

    fn node(circuit: &mut Circuit, kind: NodeKind, default_value: LogicValue) -> NodeId {
        let id = NodeId::new_for_test(circuit.node_count() as u32);
        circuit.register_node(id, kind, default_value);
        id
    }

    #[test]
    fn isolated_nodes_form_singleton_components() {
        let mut circuit = Circuit::new();
        node(&mut circuit, NodeKind::Base, LogicValue::Zero);
        node(&mut circuit, NodeKind::Base, LogicValue::One);

        let topology = Topology::build(&circuit);
        let mut solver = Solver::new();
        solver.compute_components(&topology);

        assert_eq!(solver.components.len(), 2);
        let changed = solver.resolve_and_check(&mut circuit).len();
        assert_eq!(changed, 2);
        assert_eq!(circuit.node(NodeId::new_for_test(0)).resolved_value(), LogicValue::Zero);
        assert_eq!(circuit.node(NodeId::new_for_test(1)).resolved_value(), LogicValue::One);
    }

    #[test]
    fn wired_conflict_resolves_to_x_across_a_component() {
        let mut circuit = Circuit::new();
        let a = node(&mut circuit, NodeKind::Base, LogicValue::Zero);
        let b = node(&mut circuit, NodeKind::Base, LogicValue::One);
        let c = node(&mut circuit, NodeKind::Base, LogicValue::Z);
        circuit.connect(a, b);
        circuit.connect(b, c);

        let topology = Topology::build(&circuit);
        let mut solver = Solver::new();
        solver.compute_components(&topology);
        assert_eq!(solver.components.len(), 1);
        solver.resolve_and_check(&mut circuit);

        for n in [a, b, c] {
            assert_eq!(circuit.node(n).resolved_value(), LogicValue::X);
        }
    }

    #[test]
    fn resolve_and_check_reports_no_change_on_repeat() {
        let mut circuit = Circuit::new();
        node(&mut circuit, NodeKind::Base, LogicValue::One);

        let topology = Topology::build(&circuit);
        let mut solver = Solver::new();
        solver.compute_components(&topology);
        assert!(!solver.resolve_and_check(&mut circuit).is_empty());
        assert!(solver.resolve_and_check(&mut circuit).is_empty());
    }
}
