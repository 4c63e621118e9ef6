use crate::circuit::Circuit;
use crate::device::{DeviceId, DeviceKind};
use crate::error::{Result, SimError};
use crate::node::{NodeId, NodeKind};
use crate::solver::Solver;
use crate::topology::Topology;
use crate::transistor::{TransistorId, TransistorKind};
use crate::value::LogicValue;
use log::{debug, trace, warn};

#[derive(Debug, Default)]
struct IdAllocator {
    next_node: u32,
    next_device: u32,
    next_transistor: u32,
}

impl IdAllocator {
    fn alloc_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.next_node as usize);
        self.next_node += 1;
        id
    }

    fn alloc_device(&mut self) -> DeviceId {
        let id = DeviceId(self.next_device);
        self.next_device += 1;
        id
    }

    fn alloc_transistor(&mut self) -> TransistorId {
        let id = TransistorId(self.next_transistor);
        self.next_transistor += 1;
        id
    }
}

/// A handle to a single-terminal device: `VDD`, `GND`, or `Port`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceHandle {
    device_id: DeviceId,
    node: NodeId,
}

impl DeviceHandle {
    /// The device's dense identifier.
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// The `BASE` node this device terminates at.
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// A handle to an `Input` device -- the only device kind whose driven value can change after
/// construction, via [`Simulator::input_set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputHandle {
    device_id: DeviceId,
    node: NodeId,
}

impl InputHandle {
    /// The device's dense identifier.
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// The `BASE` node this input drives.
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// A handle to a `Probe` device -- a read-only terminal sampled with [`Simulator::probe_sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeHandle {
    device_id: DeviceId,
    node: NodeId,
}

impl ProbeHandle {
    /// The device's dense identifier.
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// The `BASE` node this probe reads.
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// A handle to a transistor, with the three nodes it was wired to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransistorHandle {
    transistor_id: TransistorId,
    gate: NodeId,
    source: NodeId,
    drain: NodeId,
}

impl TransistorHandle {
    /// The transistor's dense identifier.
    pub fn transistor_id(&self) -> TransistorId {
        self.transistor_id
    }

    /// The `GATE` node controlling this transistor.
    pub fn gate(&self) -> NodeId {
        self.gate
    }

    /// One channel terminal.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The other channel terminal.
    pub fn drain(&self) -> NodeId {
        self.drain
    }
}

/// The result of one [`Simulator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The network reached a fixed point after this many solver iterations.
    Settled(usize),
    /// The iteration cap was reached without a fixed point; every node still oscillating between
    /// iterations was forced to [`LogicValue::X`]. The count is the number of iterations run.
    NonConvergent(usize),
}

/// The top-level simulation engine: owns the circuit graph, the frozen topology, and the solver's
/// scratch state, and drives `tick`'s fixed-point loop.
///
/// Lifecycle: construct devices and transistors and wire them with [`Simulator::connect`] /
/// [`Simulator::disconnect`], then call [`Simulator::build_topology`] exactly once to freeze the
/// graph. After that, [`Simulator::input_set`], [`Simulator::probe_sample`], and
/// [`Simulator::tick`] are available; further registration or wiring calls return
/// [`SimError::Registration`].
#[derive(Debug)]
pub struct Simulator {
    id_alloc: IdAllocator,
    circuit: Circuit,
    topology: Option<Topology>,
    solver: Solver,
    max_iter_override: Option<usize>,
    max_iter: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Simulator::new()
    }
}

impl Simulator {
    /// Creates an empty simulator with the default iteration cap (`2 * node_count + 16`, fixed at
    /// [`Simulator::build_topology`] time).
    pub fn new() -> Self {
        Simulator {
            id_alloc: IdAllocator::default(),
            circuit: Circuit::new(),
            topology: None,
            solver: Solver::new(),
            max_iter_override: None,
            max_iter: 0,
        }
    }

    /// Overrides the per-tick solver iteration cap instead of deriving it from node count.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter_override = Some(max_iter);
        self
    }

    fn ensure_not_built(&self) -> Result<()> {
        if self.topology.is_some() {
            return Err(SimError::Registration);
        }
        Ok(())
    }

    fn ensure_built(&self) -> Result<()> {
        if self.topology.is_none() {
            return Err(SimError::UseBeforeBuild);
        }
        Ok(())
    }

    fn new_base_node(&mut self, default_value: LogicValue) -> NodeId {
        let id = self.id_alloc.alloc_node();
        self.circuit.register_node(id, NodeKind::Base, default_value);
        id
    }

    fn new_gate_node(&mut self) -> NodeId {
        let id = self.id_alloc.alloc_node();
        self.circuit.register_node(id, NodeKind::Gate, LogicValue::Z);
        id
    }

    fn new_device(&mut self, kind: DeviceKind, default_value: LogicValue) -> Result<DeviceHandle> {
        self.ensure_not_built()?;
        let node = self.new_base_node(default_value);
        let device_id = self.id_alloc.alloc_device();
        self.circuit.register_device(device_id, kind, node);
        trace!("registered {kind} device {device_id} at node {node}");
        Ok(DeviceHandle { device_id, node })
    }

    /// Creates a `VDD` device: a node permanently driven to [`LogicValue::One`].
    pub fn create_vdd(&mut self) -> Result<DeviceHandle> {
        self.new_device(DeviceKind::Vdd, LogicValue::One)
    }

    /// Creates a `GND` device: a node permanently driven to [`LogicValue::Zero`].
    pub fn create_gnd(&mut self) -> Result<DeviceHandle> {
        self.new_device(DeviceKind::Gnd, LogicValue::Zero)
    }

    /// Creates a `Port` device: a passive node that never drives anything on its own (`Z` by
    /// default), used purely as a join point.
    pub fn create_port(&mut self) -> Result<DeviceHandle> {
        self.new_device(DeviceKind::Port, LogicValue::Z)
    }

    /// Creates a `Probe` device: a read-only node, sampled with [`Simulator::probe_sample`].
    pub fn create_probe(&mut self) -> Result<ProbeHandle> {
        self.ensure_not_built()?;
        let node = self.new_base_node(LogicValue::Z);
        let device_id = self.id_alloc.alloc_device();
        self.circuit.register_device(device_id, DeviceKind::Probe, node);
        trace!("registered Probe device {device_id} at node {node}");
        Ok(ProbeHandle { device_id, node })
    }

    /// Creates an `Input` device: a node the embedder drives with [`Simulator::input_set`], `Z`
    /// until then.
    pub fn create_input(&mut self) -> Result<InputHandle> {
        self.ensure_not_built()?;
        let node = self.new_base_node(LogicValue::Z);
        let device_id = self.id_alloc.alloc_device();
        self.circuit.register_device(device_id, DeviceKind::Input, node);
        trace!("registered Input device {device_id} at node {node}");
        Ok(InputHandle { device_id, node })
    }

    fn new_transistor(&mut self, kind: TransistorKind) -> Result<TransistorHandle> {
        self.ensure_not_built()?;
        let gate = self.new_gate_node();
        let source = self.new_base_node(LogicValue::Z);
        let drain = self.new_base_node(LogicValue::Z);
        let transistor_id = self.id_alloc.alloc_transistor();
        self.circuit
            .register_transistor(transistor_id, kind, gate, source, drain)?;
        trace!("registered {kind} transistor {transistor_id} gate={gate} source={source} drain={drain}");
        Ok(TransistorHandle {
            transistor_id,
            gate,
            source,
            drain,
        })
    }

    /// Creates an `NMOS` transistor with three freshly allocated terminal nodes.
    pub fn create_nmos(&mut self) -> Result<TransistorHandle> {
        self.new_transistor(TransistorKind::Nmos)
    }

    /// Creates a `PMOS` transistor with three freshly allocated terminal nodes.
    pub fn create_pmos(&mut self) -> Result<TransistorHandle> {
        self.new_transistor(TransistorKind::Pmos)
    }

    /// Advanced entry point: wires a transistor over existing nodes rather than allocating fresh
    /// ones, validating the same invariants [`Simulator::create_nmos`]/[`Simulator::create_pmos`]
    /// guarantee by construction (correct node kinds, pairwise distinct terminals, and a gate not
    /// already owned by another transistor).
    pub fn wire_transistor(
        &mut self,
        kind: TransistorKind,
        gate: NodeId,
        source: NodeId,
        drain: NodeId,
    ) -> Result<TransistorHandle> {
        self.ensure_not_built()?;
        let transistor_id = self.id_alloc.alloc_transistor();
        self.circuit
            .register_transistor(transistor_id, kind, gate, source, drain)?;
        Ok(TransistorHandle {
            transistor_id,
            gate,
            source,
            drain,
        })
    }

    /// Wires an undirected connection between two `BASE` nodes. A no-op if `a == b` or the wire
    /// already exists.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.ensure_not_built()?;
        self.circuit.connect(a, b);
        Ok(())
    }

    /// Removes the wire between `a` and `b`, if any.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.ensure_not_built()?;
        self.circuit.disconnect(a, b);
        Ok(())
    }

    /// Freezes the circuit graph and builds the static half of the solver's topology. Must be
    /// called exactly once, after every device/transistor/wire has been registered and before any
    /// of [`Simulator::input_set`], [`Simulator::probe_sample`], or [`Simulator::tick`].
    pub fn build_topology(&mut self) -> Result<()> {
        self.ensure_not_built()?;
        let node_count = self.circuit.node_count();
        self.max_iter = self.max_iter_override.unwrap_or(2 * node_count + 16);
        debug!(
            "freezing topology: {} nodes, {} devices, {} transistors, max_iter={}",
            node_count,
            self.circuit.devices().len(),
            self.circuit.transistor_count(),
            self.max_iter
        );
        self.topology = Some(Topology::build(&self.circuit));
        Ok(())
    }

    /// Drives an input's node to `value`. Takes effect on the next [`Simulator::tick`].
    pub fn input_set(&mut self, input: InputHandle, value: LogicValue) -> Result<()> {
        self.ensure_built()?;
        self.circuit.node_mut(input.node).set_default_value(value);
        Ok(())
    }

    /// Reads the value a probe's node last settled to. `Z` until the first `tick`.
    pub fn probe_sample(&self, probe: ProbeHandle) -> Result<LogicValue> {
        self.node_resolved_value(probe.node)
    }

    /// Reads the resolved value of any node by id, not only ones wrapped in a `Probe` device.
    ///
    /// Composite circuits built on top of the engine (gates, adders, latches) expose internal
    /// transistor/wire junctions as plain [`NodeId`]s rather than dedicated `Probe` devices; this
    /// is how their outputs are sampled.
    pub fn node_resolved_value(&self, node: NodeId) -> Result<LogicValue> {
        self.ensure_built()?;
        Ok(self.circuit.node(node).resolved_value())
    }

    /// Runs the fixed-point solver once: seeds every node from static wiring alone, then
    /// alternates rebuilding the dynamic (transistor-channel) adjacency from the most recently
    /// resolved gate values and re-resolving every component, until two consecutive passes agree
    /// or the iteration cap is reached.
    ///
    /// On cap exhaustion, every node whose `resolved_value` was still changing between the final
    /// two passes is forced to [`LogicValue::X`] and [`TickOutcome::NonConvergent`] is returned;
    /// this is the only place the engine reports non-convergence, since an oscillating ring is not
    /// a malformed circuit.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.ensure_built()?;
        let topology = self.topology.as_mut().expect("checked by ensure_built");

        topology.clear_dynamic();
        self.solver.compute_components(topology);
        self.solver.resolve_and_check(&mut self.circuit);

        let mut iterations = 0usize;
        loop {
            topology.rebuild_dynamic(&self.circuit);
            self.solver.compute_components(topology);
            let changed: Vec<NodeId> = self
                .solver
                .resolve_and_check(&mut self.circuit)
                .to_vec();
            iterations += 1;

            if changed.is_empty() {
                trace!("tick settled after {iterations} iterations");
                return Ok(TickOutcome::Settled(iterations));
            }

            if iterations >= self.max_iter {
                warn!(
                    "tick did not converge after {iterations} iterations ({} nodes still changing); forcing to X",
                    changed.len()
                );
                for node in changed {
                    self.circuit.node_mut(node).set_resolved_value(LogicValue::X);
                }
                return Ok(TickOutcome::NonConvergent(iterations));
            }
        }
    }
}
