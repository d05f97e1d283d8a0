//! The transition component: props, mounting and presence updates.
//!
//! A [`CssTransition`] owns one node, a phase engine and a class-name
//! applicator. Props are replaced wholesale on every [`set_props`] call, the
//! way a parent re-render hands a component its full prop set. Before the
//! engine sees a presence change, the externally owned `class_name` is flushed
//! to the node so the first phase callback already observes it.
//!
//! [`set_props`]: CssTransition::set_props

use std::time::Duration;

use tracing::debug;

use crate::applicator::ClassNameApplicator;
use crate::callbacks::TransitionCallbacks;
use crate::class_names::ClassNames;
use crate::engine::{PhaseEngine, TimedEngine, TransitionTimeout};
use crate::events::PhaseEvent;
use crate::node::{ClassList, TransitionNode};
use crate::phase::PresenceStatus;

/// Full prop set of a [`CssTransition`].
#[derive(Debug)]
pub struct TransitionProps<N> {
    /// The `in` flag.
    pub present: bool,
    /// Use appear class names for a mount-time enter.
    pub appear: bool,
    pub class_names: Option<ClassNames>,
    /// Host-owned classes rendered onto the node.
    pub class_name: Option<String>,
    pub timeout: TransitionTimeout,
    pub callbacks: TransitionCallbacks<N>,
}

impl<N> Default for TransitionProps<N> {
    fn default() -> Self {
        Self {
            present: false,
            appear: false,
            class_names: None,
            class_name: None,
            timeout: TransitionTimeout::default(),
            callbacks: TransitionCallbacks::default(),
        }
    }
}

impl<N> TransitionProps<N> {
    pub fn new(present: bool) -> Self {
        Self {
            present,
            ..Self::default()
        }
    }

    pub fn present(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    pub fn appear(mut self, appear: bool) -> Self {
        self.appear = appear;
        self
    }

    pub fn class_names(mut self, class_names: impl Into<ClassNames>) -> Self {
        self.class_names = Some(class_names.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn timeout(mut self, timeout: TransitionTimeout) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn callbacks(mut self, callbacks: TransitionCallbacks<N>) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn on_enter(mut self, callback: impl FnMut(&N, bool) + 'static) -> Self {
        self.callbacks = self.callbacks.on_enter(callback);
        self
    }

    pub fn on_entering(mut self, callback: impl FnMut(&N, bool) + 'static) -> Self {
        self.callbacks = self.callbacks.on_entering(callback);
        self
    }

    pub fn on_entered(mut self, callback: impl FnMut(&N, bool) + 'static) -> Self {
        self.callbacks = self.callbacks.on_entered(callback);
        self
    }

    pub fn on_exit(mut self, callback: impl FnMut(&N) + 'static) -> Self {
        self.callbacks = self.callbacks.on_exit(callback);
        self
    }

    pub fn on_exiting(mut self, callback: impl FnMut(&N) + 'static) -> Self {
        self.callbacks = self.callbacks.on_exiting(callback);
        self
    }

    pub fn on_exited(mut self, callback: impl FnMut(&N) + 'static) -> Self {
        self.callbacks = self.callbacks.on_exited(callback);
        self
    }
}

/// CSS class transition over a single node.
pub struct CssTransition<N, E = TimedEngine> {
    node: N,
    engine: E,
    applicator: ClassNameApplicator<N>,
    present: bool,
    class_names: Option<ClassNames>,
    host_classes: ClassList,
}

impl<N: TransitionNode> CssTransition<N, TimedEngine> {
    /// Mount with the default timed engine.
    pub fn mount(node: N, props: TransitionProps<N>) -> Self {
        Self::mount_with_engine(node, props, TimedEngine::new())
    }
}

impl<N: TransitionNode, E: PhaseEngine<N>> CssTransition<N, E> {
    pub fn mount_with_engine(node: N, props: TransitionProps<N>, mut engine: E) -> Self {
        let TransitionProps {
            present,
            appear,
            class_names,
            class_name,
            timeout,
            callbacks,
        } = props;

        engine.configure(&timeout);
        let mut transition = Self {
            node,
            engine,
            applicator: ClassNameApplicator::new(class_names.as_ref(), callbacks),
            present,
            class_names,
            host_classes: ClassList::new(),
        };
        transition.flush_class_name(class_name.as_deref());
        transition
            .engine
            .mount(present, appear, &mut transition.node, &mut transition.applicator);
        transition
    }

    /// Replace every prop.
    ///
    /// Host classes are flushed first, then class names and callbacks are
    /// swapped, then a presence change (if any) is handed to the engine.
    /// `appear` only matters at mount time and is ignored here.
    pub fn set_props(&mut self, props: TransitionProps<N>) {
        let TransitionProps {
            present,
            appear: _,
            class_names,
            class_name,
            timeout,
            callbacks,
        } = props;

        self.flush_class_name(class_name.as_deref());
        if class_names != self.class_names {
            debug!(?class_names, "class names replaced");
            self.applicator.set_class_names(class_names.as_ref());
            self.class_names = class_names;
        }
        self.applicator.set_callbacks(callbacks);
        self.engine.configure(&timeout);

        if present != self.present {
            self.present = present;
            self.engine
                .set_present(present, &mut self.node, &mut self.applicator);
        }
    }

    /// Flip presence, keeping every other prop.
    pub fn set_present(&mut self, present: bool) {
        if present == self.present {
            return;
        }
        self.present = present;
        self.engine
            .set_present(present, &mut self.node, &mut self.applicator);
    }

    /// Let time pass for the in-flight sequence.
    pub fn advance(&mut self, elapsed: Duration) {
        self.engine
            .advance(elapsed, &mut self.node, &mut self.applicator);
    }

    /// Forward a transition-end signal from the node.
    pub fn transition_end(&mut self) {
        self.engine
            .transition_end(&mut self.node, &mut self.applicator);
    }

    pub fn status(&self) -> PresenceStatus {
        self.engine.status()
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn applicator(&self) -> &ClassNameApplicator<N> {
        &self.applicator
    }

    pub fn drain_events(&mut self) -> Vec<PhaseEvent> {
        self.applicator.drain_events()
    }

    /// Tear the component down, handing the node back.
    pub fn unmount(self) -> N {
        self.node
    }

    /// Render host-owned classes onto the node, replacing the previous set.
    fn flush_class_name(&mut self, class_name: Option<&str>) {
        let next = ClassList::parse(class_name.unwrap_or_default());
        if next == self.host_classes {
            return;
        }
        for class in self.host_classes.iter() {
            if !next.contains(class) {
                self.node.remove_class(class);
            }
        }
        for class in next.iter() {
            self.node.add_class(class);
        }
        self.host_classes = next;
    }
}
