use crate::circuit::Circuit;
use crate::node::NodeId;

/// The adjacency the solver walks to discover connected components.
///
/// Split into a part built once from wires (`static_neighbors`) and a part rebuilt every solver
/// iteration from currently-conducting transistor channels (`dynamic_neighbors`). Keeping them
/// separate means a tick that settles without any transistor flipping never touches
/// `static_neighbors` again, and `dynamic_neighbors` is cleared and refilled in place rather than
/// reallocated, so steady-state ticks do no heap churn.
#[derive(Debug, Default)]
pub(crate) struct Topology {
    static_neighbors: Vec<Vec<NodeId>>,
    dynamic_neighbors: Vec<Vec<NodeId>>,
}

impl Topology {
    /// Builds the static half of the adjacency from `circuit`'s wires. Called once, after the
    /// circuit is frozen.
    pub(crate) fn build(circuit: &Circuit) -> Self {
        let n = circuit.node_count();
        let mut static_neighbors = vec![Vec::new(); n];
        for &(a, b) in circuit.wires() {
            static_neighbors[a.index()].push(b);
            static_neighbors[b.index()].push(a);
        }
        let dynamic_neighbors = vec![Vec::new(); n];
        Topology {
            static_neighbors,
            dynamic_neighbors,
        }
    }

    /// Clears the dynamic half without refilling it, used to seed a tick's first component pass
    /// with every transistor tentatively open.
    pub(crate) fn clear_dynamic(&mut self) {
        for neighbors in &mut self.dynamic_neighbors {
            neighbors.clear();
        }
    }

    /// Clears and refills the dynamic half from `circuit`'s transistors, using each transistor's
    /// gate's currently resolved value to decide whether its channel conducts.
    pub(crate) fn rebuild_dynamic(&mut self, circuit: &Circuit) {
        self.clear_dynamic();
        for transistor in circuit.transistors() {
            let gate_value = circuit.node(transistor.gate()).resolved_value();
            if transistor.is_conducting(gate_value) {
                let (source, drain) = (transistor.source(), transistor.drain());
                self.dynamic_neighbors[source.index()].push(drain);
                self.dynamic_neighbors[drain.index()].push(source);
            }
        }
    }

    /// Appends every neighbor of `node` -- static and dynamic -- to `out`.
    pub(crate) fn neighbors_into(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.extend_from_slice(&self.static_neighbors[node.index()]);
        out.extend_from_slice(&self.dynamic_neighbors[node.index()]);
    }

    pub(crate) fn node_count(&self) -> usize {
        self.static_neighbors.len()
    }
}
