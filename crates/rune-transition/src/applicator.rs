//! Class-name applicator and lifecycle hook relay.
//!
//! [`ClassNameApplicator`] sits between a phase engine and the user callbacks.
//! For each phase it first mutates the node's class list, then records a
//! [`PhaseEvent`] and finally relays the user callback, so callbacks always
//! observe the post-mutation class string.
//!
//! Sequencing rules:
//! - start: release every class still owned from earlier phases, add the start class
//! - active: commit pending styles, then add the active class on top of the start class
//! - done: release the start and active classes, add the done class(es)
//!
//! Only classes the applicator added itself are ever removed; classes set by
//! the host (or already present when a phase ran) are left alone.

use tracing::{trace, warn};

use crate::callbacks::TransitionCallbacks;
use crate::class_names::{ClassNames, ResolvedClassNames};
use crate::engine::PhaseHooks;
use crate::events::{EventQueue, PhaseEvent};
use crate::node::TransitionNode;
use crate::phase::{PhaseStep, TransitionPhase};

pub struct ClassNameApplicator<N> {
    names: ResolvedClassNames,
    owned: Vec<String>,
    callbacks: TransitionCallbacks<N>,
    events: EventQueue,
}

impl<N: TransitionNode> ClassNameApplicator<N> {
    /// Build an applicator. Invalid or missing class names produce a pass-through relay.
    pub fn new(class_names: Option<&ClassNames>, callbacks: TransitionCallbacks<N>) -> Self {
        Self {
            names: resolve_or_pass_through(class_names),
            owned: Vec::new(),
            callbacks,
            events: EventQueue::new(),
        }
    }

    /// Replace the class-name configuration wholesale.
    ///
    /// Classes already applied stay owned and are released by the next start
    /// or done phase.
    pub fn set_class_names(&mut self, class_names: Option<&ClassNames>) {
        self.names = resolve_or_pass_through(class_names);
    }

    pub fn set_callbacks(&mut self, callbacks: TransitionCallbacks<N>) {
        self.callbacks = callbacks;
    }

    pub fn class_names(&self) -> &ResolvedClassNames {
        &self.names
    }

    /// Classes currently on the node because of this applicator.
    pub fn owned_classes(&self) -> &[String] {
        &self.owned
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<PhaseEvent> {
        self.events.drain().collect()
    }

    /// Mutate the node for `phase`. Returns false when the node was detached.
    fn apply(&mut self, phase: TransitionPhase, node: &mut N, appearing: bool) -> bool {
        if !node.is_connected() {
            trace!(%phase, "node detached, skipping class mutation");
            return false;
        }
        let direction = phase.direction();
        match phase.step() {
            PhaseStep::Start => {
                self.release(node);
                if let Some(start) = self.names.start_class(direction, appearing) {
                    let start = start.to_string();
                    self.add(node, &start);
                }
            }
            PhaseStep::Active => {
                if let Some(active) = self.names.active_class(direction, appearing) {
                    let active = active.to_string();
                    node.commit_pending_styles();
                    self.add(node, &active);
                }
            }
            PhaseStep::Done => {
                self.release(node);
                let done: Vec<String> = self
                    .names
                    .done_classes(direction, appearing)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                for class in &done {
                    self.add(node, class);
                }
            }
        }
        true
    }

    fn add(&mut self, node: &mut N, class: &str) {
        if node.contains_class(class) {
            return;
        }
        node.add_class(class);
        self.owned.push(class.to_string());
    }

    fn release(&mut self, node: &mut N) {
        for class in self.owned.drain(..) {
            node.remove_class(&class);
        }
    }
}

impl<N: TransitionNode> PhaseHooks<N> for ClassNameApplicator<N> {
    fn on_phase(&mut self, phase: TransitionPhase, node: &mut N, appearing: bool) {
        let mutated = self.apply(phase, node, appearing);
        let class_name = node.class_name();
        trace!(%phase, appearing, %class_name, callback = phase.callback_name(), "relaying phase");
        self.events.push(PhaseEvent {
            phase,
            appearing,
            class_name,
            mutated,
        });
        self.callbacks.invoke(phase, node, appearing);
    }
}

fn resolve_or_pass_through(class_names: Option<&ClassNames>) -> ResolvedClassNames {
    let Some(class_names) = class_names else {
        return ResolvedClassNames::none();
    };
    match class_names.validate() {
        Ok(()) => class_names.resolve(),
        Err(err) => {
            warn!(%err, "invalid class names, transition will not touch classes");
            ResolvedClassNames::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_names::ClassNameMap;
    use crate::node::ElementNode;

    fn applicator(class_names: Option<ClassNames>) -> ClassNameApplicator<ElementNode> {
        ClassNameApplicator::new(class_names.as_ref(), TransitionCallbacks::new())
    }

    fn run(
        applicator: &mut ClassNameApplicator<ElementNode>,
        node: &mut ElementNode,
        phases: [TransitionPhase; 3],
        appearing: bool,
    ) -> Vec<String> {
        phases
            .into_iter()
            .map(|phase| {
                applicator.on_phase(phase, &mut *node, appearing);
                node.class_name()
            })
            .collect()
    }

    #[test]
    fn style_commit_happens_before_active_class() {
        let mut node = ElementNode::new("div");
        let mut applicator = applicator(Some("fade".into()));

        applicator.on_phase(TransitionPhase::EnterStart, &mut node, false);
        assert_eq!(node.style_commits(), 0);
        applicator.on_phase(TransitionPhase::EnterActive, &mut node, false);
        assert_eq!(node.style_commits(), 1);
        applicator.on_phase(TransitionPhase::EnterDone, &mut node, false);
        assert_eq!(node.style_commits(), 1);
    }

    #[test]
    fn host_classes_survive_a_full_cycle() {
        let mut node = ElementNode::with_class_name("div", "card");
        let mut applicator = applicator(Some("fade".into()));

        let enter = run(&mut applicator, &mut node, TransitionPhase::ENTER, false);
        assert_eq!(
            enter,
            vec![
                "card fade-enter",
                "card fade-enter fade-enter-active",
                "card fade-enter-done"
            ]
        );
        let exit = run(&mut applicator, &mut node, TransitionPhase::EXIT, false);
        assert_eq!(
            exit,
            vec![
                "card fade-exit",
                "card fade-exit fade-exit-active",
                "card fade-exit-done"
            ]
        );
    }

    #[test]
    fn superseded_sequence_leaves_no_stale_classes() {
        let mut node = ElementNode::new("div");
        let mut applicator = applicator(Some("fade".into()));

        applicator.on_phase(TransitionPhase::EnterStart, &mut node, false);
        applicator.on_phase(TransitionPhase::EnterActive, &mut node, false);
        applicator.on_phase(TransitionPhase::ExitStart, &mut node, false);
        assert_eq!(node.class_name(), "fade-exit");
        assert_eq!(applicator.owned_classes(), ["fade-exit".to_string()]);
    }

    #[test]
    fn detached_node_is_a_no_op() {
        let mut node = ElementNode::new("div");
        let mut applicator = applicator(Some("fade".into()));

        applicator.on_phase(TransitionPhase::ExitStart, &mut node, false);
        node.detach();
        applicator.on_phase(TransitionPhase::ExitActive, &mut node, false);

        assert_eq!(node.class_name(), "fade-exit");
        assert_eq!(node.style_commits(), 0);
        let events = applicator.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events[0].mutated);
        assert!(!events[1].mutated);
    }

    #[test]
    fn missing_or_invalid_names_pass_through() {
        for class_names in [None, Some(ClassNames::from("bad prefix"))] {
            let mut node = ElementNode::with_class_name("div", "keep");
            let mut applicator = applicator(class_names);
            let enter = run(&mut applicator, &mut node, TransitionPhase::ENTER, false);
            assert_eq!(enter, vec!["keep", "keep", "keep"]);
            assert_eq!(node.style_commits(), 0);
            assert!(applicator.class_names().is_empty());
        }
    }

    #[test]
    fn replaced_names_release_previous_classes() {
        let mut node = ElementNode::new("div");
        let mut applicator = applicator(Some("old".into()));
        run(&mut applicator, &mut node, TransitionPhase::ENTER, false);
        assert_eq!(node.class_name(), "old-enter-done");

        applicator.set_class_names(Some(&ClassNames::from(ClassNameMap {
            exit: Some("leave".into()),
            ..Default::default()
        })));
        let exit = run(&mut applicator, &mut node, TransitionPhase::EXIT, false);
        assert_eq!(exit, vec!["leave", "leave leave-active", "leave-done"]);
    }

    #[test]
    fn callbacks_observe_mutated_node() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let callbacks = TransitionCallbacks::new()
            .on_entering(move |node: &ElementNode, _| log.borrow_mut().push(node.class_name()));
        let mut applicator = ClassNameApplicator::new(Some(&ClassNames::from("x")), callbacks);
        let mut node = ElementNode::new("div");
        run(&mut applicator, &mut node, TransitionPhase::ENTER, false);

        assert_eq!(*seen.borrow(), vec!["x-enter x-enter-active".to_string()]);
    }
}
