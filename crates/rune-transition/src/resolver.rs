//! Class tokens expected on the node after each phase.
//!
//! This is the declarative view of what [`ClassNameApplicator`] does to a
//! node; external classes set by the host are not included.
//!
//! [`ClassNameApplicator`]: crate::applicator::ClassNameApplicator

use crate::class_names::ResolvedClassNames;
use crate::node::ClassList;
use crate::phase::{PhaseStep, TransitionPhase};

/// Ordered class tokens owned by the transition once `phase` has been applied.
///
/// Start and active classes are additive within a sequence; done classes
/// replace them entirely. Appearing only affects the enter sequence.
pub fn classes_for_phase(
    names: &ResolvedClassNames,
    phase: TransitionPhase,
    appearing: bool,
) -> Vec<String> {
    let direction = phase.direction();
    let mut list = ClassList::new();
    match phase.step() {
        PhaseStep::Start => {
            if let Some(start) = names.start_class(direction, appearing) {
                list.add(start);
            }
        }
        PhaseStep::Active => {
            if let Some(start) = names.start_class(direction, appearing) {
                list.add(start);
            }
            if let Some(active) = names.active_class(direction, appearing) {
                list.add(active);
            }
        }
        PhaseStep::Done => {
            for done in names.done_classes(direction, appearing) {
                list.add(done);
            }
        }
    }
    list.iter().map(str::to_string).collect()
}
