//! Phase events for observing a transition after the fact.
//!
//! Every phase relayed by the applicator is recorded with the class string the
//! node carried when its callback ran. Events can be drained after each
//! presence change or engine advance.
//!
//! # Usage
//!
//! ```ignore
//! transition.set_props(props().present(true));
//! transition.advance(Duration::from_millis(300));
//!
//! for event in transition.drain_events() {
//!     println!("{} -> {:?}", event.phase, event.class_name);
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::phase::{Direction, TransitionPhase};

/// A relayed phase together with the node state its callback observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEvent {
    /// The phase that fired.
    pub phase: TransitionPhase,
    /// Whether the phase belongs to the appear sequence.
    pub appearing: bool,
    /// Class string on the node after the phase mutation.
    pub class_name: String,
    /// False when the node was detached and the mutation was skipped.
    pub mutated: bool,
}

impl PhaseEvent {
    pub fn direction(&self) -> Direction {
        self.phase.direction()
    }
}

/// Queue of phase events in firing order.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<PhaseEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PhaseEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn pop(&mut self) -> Option<PhaseEvent> {
        self.events.pop_front()
    }

    pub fn peek(&self) -> Option<&PhaseEvent> {
        self.events.front()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = PhaseEvent> + '_ {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Class strings of the queued events, oldest first.
    pub fn class_names(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.class_name.as_str()).collect()
    }
}
