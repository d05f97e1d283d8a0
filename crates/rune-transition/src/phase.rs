//! Phases and presence states of a transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a transition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Enter,
    Exit,
}

/// Position of a phase inside its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStep {
    Start,
    Active,
    Done,
}

/// One of the six points of a transition at which classes change and a hook fires.
///
/// The enter and exit phases form two ordered sequences that never interleave:
/// a new sequence only begins once the previous one has finished or been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    EnterStart,
    EnterActive,
    EnterDone,
    ExitStart,
    ExitActive,
    ExitDone,
}

impl TransitionPhase {
    /// The enter sequence in firing order.
    pub const ENTER: [TransitionPhase; 3] = [Self::EnterStart, Self::EnterActive, Self::EnterDone];
    /// The exit sequence in firing order.
    pub const EXIT: [TransitionPhase; 3] = [Self::ExitStart, Self::ExitActive, Self::ExitDone];

    pub fn new(direction: Direction, step: PhaseStep) -> Self {
        match (direction, step) {
            (Direction::Enter, PhaseStep::Start) => Self::EnterStart,
            (Direction::Enter, PhaseStep::Active) => Self::EnterActive,
            (Direction::Enter, PhaseStep::Done) => Self::EnterDone,
            (Direction::Exit, PhaseStep::Start) => Self::ExitStart,
            (Direction::Exit, PhaseStep::Active) => Self::ExitActive,
            (Direction::Exit, PhaseStep::Done) => Self::ExitDone,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::EnterStart | Self::EnterActive | Self::EnterDone => Direction::Enter,
            Self::ExitStart | Self::ExitActive | Self::ExitDone => Direction::Exit,
        }
    }

    pub fn step(self) -> PhaseStep {
        match self {
            Self::EnterStart | Self::ExitStart => PhaseStep::Start,
            Self::EnterActive | Self::ExitActive => PhaseStep::Active,
            Self::EnterDone | Self::ExitDone => PhaseStep::Done,
        }
    }

    /// Name of the user callback relayed after this phase.
    pub fn callback_name(self) -> &'static str {
        match self {
            Self::EnterStart => "on_enter",
            Self::EnterActive => "on_entering",
            Self::EnterDone => "on_entered",
            Self::ExitStart => "on_exit",
            Self::ExitActive => "on_exiting",
            Self::ExitDone => "on_exited",
        }
    }
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnterStart => "enter-start",
            Self::EnterActive => "enter-active",
            Self::EnterDone => "enter-done",
            Self::ExitStart => "exit-start",
            Self::ExitActive => "exit-active",
            Self::ExitDone => "exit-done",
        };
        f.write_str(name)
    }
}

/// Presence state owned by a phase engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    #[default]
    Exited,
    Entering,
    Entered,
    Exiting,
}

impl PresenceStatus {
    /// `Entered` and `Exited` are the only states with no sequence in flight.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Entered | Self::Exited)
    }

    /// Whether the engine is heading towards (or resting in) the present state.
    pub fn targets_present(self) -> bool {
        matches!(self, Self::Entering | Self::Entered)
    }
}
