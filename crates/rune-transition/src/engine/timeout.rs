use std::time::Duration;

use crate::phase::Direction;

/// How an engine decides that a sequence has run its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTimeout {
    /// Complete after a fixed duration per direction. `appear` defaults to `enter`.
    Fixed {
        enter: Duration,
        exit: Duration,
        appear: Option<Duration>,
    },
    /// Wait for an explicit transition-end signal.
    EndSignal,
}

impl Default for TransitionTimeout {
    fn default() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

impl TransitionTimeout {
    /// Same duration for every sequence.
    pub fn uniform(duration: Duration) -> Self {
        Self::Fixed {
            enter: duration,
            exit: duration,
            appear: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::uniform(Duration::from_millis(ms))
    }

    /// Deadline for a sequence, or `None` when only an end signal completes it.
    pub fn deadline(&self, direction: Direction, appearing: bool) -> Option<Duration> {
        match *self {
            Self::Fixed { enter, exit, appear } => Some(match direction {
                Direction::Enter if appearing => appear.unwrap_or(enter),
                Direction::Enter => enter,
                Direction::Exit => exit,
            }),
            Self::EndSignal => None,
        }
    }
}
