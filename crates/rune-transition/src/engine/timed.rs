use std::time::Duration;

use tracing::{debug, trace};

use super::{PhaseEngine, PhaseHooks, TransitionTimeout};
use crate::phase::{Direction, PhaseStep, PresenceStatus, TransitionPhase};

/// Sequence waiting for its done hook.
#[derive(Debug, Clone, Copy)]
struct PendingCompletion {
    elapsed: Duration,
    deadline: Option<Duration>,
}

/// Phase engine completing sequences after a timeout or an end signal.
///
/// Time only moves when the host calls [`advance`](PhaseEngine::advance), so
/// the engine is deterministic and frame-loop friendly. An end signal always
/// completes the in-flight sequence, even when a fixed timeout is configured.
#[derive(Debug, Default)]
pub struct TimedEngine {
    status: PresenceStatus,
    appearing: bool,
    timeout: TransitionTimeout,
    pending: Option<PendingCompletion>,
}

impl TimedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: TransitionTimeout) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> TransitionTimeout {
        self.timeout
    }

    /// Whether a sequence is waiting for its done hook.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn perform<N>(
        &mut self,
        direction: Direction,
        appearing: bool,
        node: &mut N,
        hooks: &mut dyn PhaseHooks<N>,
    ) {
        if self.pending.take().is_some() {
            debug!(status = ?self.status, "superseding in-flight sequence");
        }
        self.appearing = appearing;
        self.status = match direction {
            Direction::Enter => PresenceStatus::Entering,
            Direction::Exit => PresenceStatus::Exiting,
        };
        hooks.on_phase(TransitionPhase::new(direction, PhaseStep::Start), node, appearing);
        hooks.on_phase(TransitionPhase::new(direction, PhaseStep::Active), node, appearing);
        self.pending = Some(PendingCompletion {
            elapsed: Duration::ZERO,
            deadline: self.timeout.deadline(direction, appearing),
        });
        trace!(?direction, appearing, "sequence started");
    }

    fn complete<N>(&mut self, node: &mut N, hooks: &mut dyn PhaseHooks<N>) {
        if self.pending.take().is_none() {
            return;
        }
        let appearing = self.appearing;
        let phase = match self.status {
            PresenceStatus::Entering => {
                self.status = PresenceStatus::Entered;
                TransitionPhase::EnterDone
            }
            PresenceStatus::Exiting => {
                self.status = PresenceStatus::Exited;
                TransitionPhase::ExitDone
            }
            PresenceStatus::Entered | PresenceStatus::Exited => return,
        };
        trace!(%phase, "sequence completed");
        hooks.on_phase(phase, node, appearing);
        self.appearing = false;
    }
}

impl<N> PhaseEngine<N> for TimedEngine {
    fn configure(&mut self, timeout: &TransitionTimeout) {
        self.timeout = *timeout;
    }

    fn status(&self) -> PresenceStatus {
        self.status
    }

    fn appearing(&self) -> bool {
        self.appearing
    }

    fn mount(&mut self, present: bool, appear: bool, node: &mut N, hooks: &mut dyn PhaseHooks<N>) {
        self.pending = None;
        self.appearing = false;
        match (present, appear) {
            (true, true) => {
                self.status = PresenceStatus::Exited;
                self.perform(Direction::Enter, true, node, hooks);
            }
            (true, false) => self.status = PresenceStatus::Entered,
            (false, _) => self.status = PresenceStatus::Exited,
        }
        debug!(present, appear, status = ?self.status, "mounted");
    }

    fn set_present(&mut self, present: bool, node: &mut N, hooks: &mut dyn PhaseHooks<N>) {
        if present == self.status.targets_present() {
            return;
        }
        debug!(present, from = ?self.status, "presence changed");
        let direction = if present {
            Direction::Enter
        } else {
            Direction::Exit
        };
        self.perform(direction, false, node, hooks);
    }

    fn advance(&mut self, elapsed: Duration, node: &mut N, hooks: &mut dyn PhaseHooks<N>) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        pending.elapsed = pending.elapsed.saturating_add(elapsed);
        if let Some(deadline) = pending.deadline
            && pending.elapsed >= deadline
        {
            self.complete(node, hooks);
        }
    }

    fn transition_end(&mut self, node: &mut N, hooks: &mut dyn PhaseHooks<N>) {
        self.complete(node, hooks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        fired: Vec<(TransitionPhase, bool)>,
    }

    impl PhaseHooks<()> for Recorder {
        fn on_phase(&mut self, phase: TransitionPhase, _node: &mut (), appearing: bool) {
            self.fired.push((phase, appearing));
        }
    }

    fn engine(ms: u64) -> TimedEngine {
        TimedEngine::with_timeout(TransitionTimeout::from_millis(ms))
    }

    #[test]
    fn enter_fires_start_and_active_then_done_after_timeout() {
        let mut engine = engine(10);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, false, false, &mut (), &mut hooks);
        assert!(hooks.fired.is_empty());

        engine.set_present(true, &mut (), &mut hooks);
        assert_eq!(
            hooks.fired,
            vec![
                (TransitionPhase::EnterStart, false),
                (TransitionPhase::EnterActive, false)
            ]
        );
        assert_eq!(PhaseEngine::<()>::status(&engine), PresenceStatus::Entering);

        engine.advance(Duration::from_millis(9), &mut (), &mut hooks);
        assert_eq!(hooks.fired.len(), 2);
        engine.advance(Duration::from_millis(1), &mut (), &mut hooks);
        assert_eq!(hooks.fired.last(), Some(&(TransitionPhase::EnterDone, false)));
        assert_eq!(PhaseEngine::<()>::status(&engine), PresenceStatus::Entered);
        assert!(!engine.is_pending());
    }

    #[test]
    fn zero_timeout_completes_on_next_advance() {
        let mut engine = engine(0);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, true, false, &mut (), &mut hooks);
        engine.set_present(false, &mut (), &mut hooks);
        engine.advance(Duration::ZERO, &mut (), &mut hooks);
        let phases: Vec<_> = hooks.fired.iter().map(|(p, _)| *p).collect();
        assert_eq!(phases, TransitionPhase::EXIT.to_vec());
    }

    #[test]
    fn mount_present_without_appear_fires_nothing() {
        let mut engine = engine(10);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, true, false, &mut (), &mut hooks);
        engine.advance(Duration::from_millis(50), &mut (), &mut hooks);
        assert!(hooks.fired.is_empty());
        assert_eq!(PhaseEngine::<()>::status(&engine), PresenceStatus::Entered);
    }

    #[test]
    fn appear_flag_is_only_set_for_the_mount_sequence() {
        let mut engine = engine(5);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, true, true, &mut (), &mut hooks);
        assert!(PhaseEngine::<()>::appearing(&engine));
        engine.advance(Duration::from_millis(5), &mut (), &mut hooks);
        assert!(!PhaseEngine::<()>::appearing(&engine));

        engine.set_present(false, &mut (), &mut hooks);
        engine.advance(Duration::from_millis(5), &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        engine.advance(Duration::from_millis(5), &mut (), &mut hooks);

        let appearing: Vec<_> = hooks.fired.iter().map(|(_, a)| *a).collect();
        assert_eq!(
            appearing,
            vec![true, true, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn flipping_mid_sequence_skips_done_hook() {
        let mut engine = engine(10);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, false, false, &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        engine.advance(Duration::from_millis(5), &mut (), &mut hooks);
        engine.set_present(false, &mut (), &mut hooks);
        engine.advance(Duration::from_millis(9), &mut (), &mut hooks);
        engine.advance(Duration::from_millis(1), &mut (), &mut hooks);

        let phases: Vec<_> = hooks.fired.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            phases,
            vec![
                TransitionPhase::EnterStart,
                TransitionPhase::EnterActive,
                TransitionPhase::ExitStart,
                TransitionPhase::ExitActive,
                TransitionPhase::ExitDone,
            ]
        );
    }

    #[test]
    fn repeated_presence_is_ignored() {
        let mut engine = engine(10);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, false, false, &mut (), &mut hooks);
        engine.set_present(false, &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        assert_eq!(hooks.fired.len(), 2);
    }

    #[test]
    fn end_signal_waits_for_transition_end() {
        let mut engine = TimedEngine::with_timeout(TransitionTimeout::EndSignal);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, false, false, &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        engine.advance(Duration::from_secs(60), &mut (), &mut hooks);
        assert_eq!(hooks.fired.len(), 2);

        engine.transition_end(&mut (), &mut hooks);
        assert_eq!(hooks.fired.last(), Some(&(TransitionPhase::EnterDone, false)));

        // A stray signal with nothing in flight does nothing.
        engine.transition_end(&mut (), &mut hooks);
        assert_eq!(hooks.fired.len(), 3);
    }

    #[test]
    fn unbounded_waits_do_not_overflow() {
        let mut engine = TimedEngine::with_timeout(TransitionTimeout::EndSignal);
        let mut hooks = Recorder::default();
        PhaseEngine::<()>::mount(&mut engine, false, false, &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        engine.advance(Duration::MAX, &mut (), &mut hooks);
        engine.advance(Duration::MAX, &mut (), &mut hooks);
        assert!(engine.is_pending());

        engine.transition_end(&mut (), &mut hooks);
        assert_eq!(hooks.fired.last(), Some(&(TransitionPhase::EnterDone, false)));
        assert_eq!(PhaseEngine::<()>::status(&engine), PresenceStatus::Entered);
    }

    #[test]
    fn closures_are_hooks() {
        let mut engine = engine(0);
        let mut count = 0;
        let mut hooks = |_phase: TransitionPhase, _node: &mut (), _appearing: bool| count += 1;
        engine.mount(false, false, &mut (), &mut hooks);
        engine.set_present(true, &mut (), &mut hooks);
        engine.advance(Duration::ZERO, &mut (), &mut hooks);
        assert_eq!(count, 3);
    }
}
