use crate::gate::NotGate;
use sim_core::{InputHandle, NodeId, Result, Simulator, TickOutcome};

/// An odd-length chain of inverters with its output fed back into its input.
///
/// At rest, with [`RingOscillator::kick`] left floating at `Z`, every gate in the loop starts
/// undriven: the first static-only pass finds no conducting transistor, so the loop settles into
/// the trivial all-`Z` fixed point like any other undriven net. That is a legitimate switch-level
/// outcome, not oscillation. Driving `kick` to a definite bit before a [`Simulator::tick`] breaks
/// that symmetry; an odd loop of inverters has no assignment consistent with every stage inverting
/// its neighbor, so the resulting chain of transistor conduction never reaches a fixed point and
/// the tick runs to its iteration cap, reporting [`TickOutcome::NonConvergent`].
#[derive(Clone, Debug)]
pub struct RingOscillator {
    /// The node shared by the final inverter's output and the first inverter's input.
    pub stages: Vec<NodeId>,
    /// A one-shot input wired onto `stages[0]`. Floating (the default) it contributes nothing;
    /// driven to `Zero` or `One` before a tick it breaks the loop's symmetric rest state.
    pub kick: InputHandle,
}

impl RingOscillator {
    /// Builds a ring oscillator out of `stage_count` inverters, which must be odd and at least 3
    /// (an even count settles into a stable loop rather than oscillating).
    pub fn new(sim: &mut Simulator, stage_count: usize) -> Result<Self> {
        assert!(stage_count >= 3, "ring oscillator needs at least 3 stages");
        assert!(stage_count % 2 == 1, "ring oscillator stage count must be odd");

        let gates: Vec<NotGate> = (0..stage_count)
            .map(|_| NotGate::new(sim))
            .collect::<Result<_>>()?;
        for pair in gates.windows(2) {
            sim.connect(pair[0].output, pair[1].input)?;
        }
        sim.connect(gates.last().unwrap().output, gates[0].input)?;

        let kick = sim.create_input()?;
        sim.connect(kick.node(), gates[0].output)?;

        Ok(RingOscillator {
            stages: gates.iter().map(|gate| gate.output).collect(),
            kick,
        })
    }
}

/// Whether a tick outcome reports the solver as still unsettled.
pub fn is_oscillating(outcome: TickOutcome) -> bool {
    matches!(outcome, TickOutcome::NonConvergent(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn odd_inverter_loop_never_converges() {
        let mut sim = Simulator::new();
        let oscillator = RingOscillator::new(&mut sim, 5).unwrap();
        sim.build_topology().unwrap();
        sim.input_set(oscillator.kick, LogicValue::Zero).unwrap();
        let outcome = sim.tick().unwrap();
        assert!(is_oscillating(outcome));
        assert_eq!(oscillator.stages.len(), 5);
    }

    #[test]
    fn undriven_ring_settles_at_rest() {
        let mut sim = Simulator::new();
        let oscillator = RingOscillator::new(&mut sim, 3).unwrap();
        sim.build_topology().unwrap();
        let outcome = sim.tick().unwrap();
        assert!(!is_oscillating(outcome));
        for stage in &oscillator.stages {
            assert_eq!(sim.node_resolved_value(*stage).unwrap(), LogicValue::Z);
        }
    }

    #[test]
    #[should_panic]
    fn rejects_even_stage_count() {
        let mut sim = Simulator::new();
        RingOscillator::new(&mut sim, 4).unwrap();
    }

    #[test]
    #[should_panic]
    fn rejects_too_few_stages() {
        let mut sim = Simulator::new();
        RingOscillator::new(&mut sim, 1).unwrap();
    }
}
