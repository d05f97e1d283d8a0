//! Phase engines decide when each phase of a transition ends.
//!
//! An engine owns the presence status and fires the six phase hooks in order.
//! It never touches classes itself; [`PhaseHooks`] receivers do that. Any
//! engine (timer driven, end-signal driven, or stepped by hand) can drive a
//! [`CssTransition`](crate::CssTransition).

use std::time::Duration;

use crate::phase::{PresenceStatus, TransitionPhase};

mod timed;
mod timeout;

pub use timed::TimedEngine;
pub use timeout::TransitionTimeout;

/// Receiver of phase notifications.
pub trait PhaseHooks<N> {
    fn on_phase(&mut self, phase: TransitionPhase, node: &mut N, appearing: bool);
}

impl<N, F> PhaseHooks<N> for F
where
    F: FnMut(TransitionPhase, &mut N, bool),
{
    fn on_phase(&mut self, phase: TransitionPhase, node: &mut N, appearing: bool) {
        self(phase, node, appearing)
    }
}

/// Presence state machine driving phase hooks.
///
/// Hooks for the start and active phases of a sequence fire from
/// [`mount`](Self::mount) or [`set_present`](Self::set_present); the done hook
/// fires from [`advance`](Self::advance) or [`transition_end`](Self::transition_end).
/// Flipping presence mid-sequence supersedes it without a done hook.
pub trait PhaseEngine<N> {
    /// Replace the completion policy. Applies to sequences started afterwards.
    fn configure(&mut self, timeout: &TransitionTimeout);

    fn status(&self) -> PresenceStatus;

    /// Whether the current enter sequence is the mount-time appear sequence.
    fn appearing(&self) -> bool;

    /// Initial presence. With `present && appear` the appear sequence starts
    /// immediately; with `present` alone the engine rests in `Entered`.
    fn mount(&mut self, present: bool, appear: bool, node: &mut N, hooks: &mut dyn PhaseHooks<N>);

    /// React to a presence flip. Setting the value already targeted is a no-op.
    fn set_present(&mut self, present: bool, node: &mut N, hooks: &mut dyn PhaseHooks<N>);

    /// Let time pass for the in-flight sequence.
    fn advance(&mut self, elapsed: Duration, node: &mut N, hooks: &mut dyn PhaseHooks<N>);

    /// Signal that the node's CSS transition or animation finished.
    fn transition_end(&mut self, node: &mut N, hooks: &mut dyn PhaseHooks<N>);
}
