//! CSS class transitions driven by a presence flag.
//!
//! A [`CssTransition`] wraps one node and flips its class list through the
//! enter and exit sequences as the `in` flag changes:
//!
//! ```text
//! Exited --(in=true)--> Entering{EnterStart -> EnterActive} --(timeout/signal)--> Entered{EnterDone}
//! Entered --(in=false)--> Exiting{ExitStart -> ExitActive} --(timeout/signal)--> Exited{ExitDone}
//! ```
//!
//! The start class and the active class always land on either side of a
//! [`TransitionNode::commit_pending_styles`] call, so the style engine sees the
//! active class as a fresh change and runs the CSS transition.
//!
//! # Architecture
//!
//! ```text
//! CssTransition
//!   ├── PhaseEngine (TimedEngine by default)   decides when each phase ends
//!   └── ClassNameApplicator (PhaseHooks)       mutates classes, relays callbacks
//!         ├── ResolvedClassNames               from ClassNames (prefix or mapping)
//!         └── EventQueue                       log of relayed phases
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use rune_transition::{CssTransition, ElementNode, TransitionProps, TransitionTimeout};
//!
//! let props = || {
//!     TransitionProps::new(false)
//!         .class_names("fade")
//!         .timeout(TransitionTimeout::from_millis(150))
//! };
//! let mut transition = CssTransition::mount(ElementNode::new("div"), props());
//!
//! transition.set_props(props().present(true));
//! assert_eq!(transition.node().class_name(), "fade-enter fade-enter-active");
//!
//! transition.advance(Duration::from_millis(150));
//! assert_eq!(transition.node().class_name(), "fade-enter-done");
//! ```

pub mod applicator;
pub mod callbacks;
pub mod class_names;
pub mod css_transition;
pub mod engine;
pub mod events;
pub mod node;
pub mod phase;
pub mod resolver;

pub use applicator::ClassNameApplicator;
pub use callbacks::{EnterCallback, ExitCallback, TransitionCallbacks};
pub use class_names::{ClassNameMap, ClassNames, ClassNamesError, PhaseClassNames, ResolvedClassNames};
pub use css_transition::{CssTransition, TransitionProps};
pub use engine::{PhaseEngine, PhaseHooks, TimedEngine, TransitionTimeout};
pub use events::{EventQueue, PhaseEvent};
pub use node::{ClassList, ElementNode, TransitionNode};
pub use phase::{Direction, PhaseStep, PresenceStatus, TransitionPhase};
pub use resolver::classes_for_phase;
