//! User callbacks relayed after each phase mutation.

use std::fmt;

use crate::phase::TransitionPhase;

/// Callback receiving the node and the `appearing` flag.
pub type EnterCallback<N> = Box<dyn FnMut(&N, bool)>;
/// Callback receiving the node only.
pub type ExitCallback<N> = Box<dyn FnMut(&N)>;

/// The six optional lifecycle callbacks of a transition.
pub struct TransitionCallbacks<N> {
    on_enter: Option<EnterCallback<N>>,
    on_entering: Option<EnterCallback<N>>,
    on_entered: Option<EnterCallback<N>>,
    on_exit: Option<ExitCallback<N>>,
    on_exiting: Option<ExitCallback<N>>,
    on_exited: Option<ExitCallback<N>>,
}

impl<N> Default for TransitionCallbacks<N> {
    fn default() -> Self {
        Self {
            on_enter: None,
            on_entering: None,
            on_entered: None,
            on_exit: None,
            on_exiting: None,
            on_exited: None,
        }
    }
}

impl<N> TransitionCallbacks<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(mut self, callback: impl FnMut(&N, bool) + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    pub fn on_entering(mut self, callback: impl FnMut(&N, bool) + 'static) -> Self {
        self.on_entering = Some(Box::new(callback));
        self
    }

    pub fn on_entered(mut self, callback: impl FnMut(&N, bool) + 'static) -> Self {
        self.on_entered = Some(Box::new(callback));
        self
    }

    pub fn on_exit(mut self, callback: impl FnMut(&N) + 'static) -> Self {
        self.on_exit = Some(Box::new(callback));
        self
    }

    pub fn on_exiting(mut self, callback: impl FnMut(&N) + 'static) -> Self {
        self.on_exiting = Some(Box::new(callback));
        self
    }

    pub fn on_exited(mut self, callback: impl FnMut(&N) + 'static) -> Self {
        self.on_exited = Some(Box::new(callback));
        self
    }

    pub fn has(&self, phase: TransitionPhase) -> bool {
        match phase {
            TransitionPhase::EnterStart => self.on_enter.is_some(),
            TransitionPhase::EnterActive => self.on_entering.is_some(),
            TransitionPhase::EnterDone => self.on_entered.is_some(),
            TransitionPhase::ExitStart => self.on_exit.is_some(),
            TransitionPhase::ExitActive => self.on_exiting.is_some(),
            TransitionPhase::ExitDone => self.on_exited.is_some(),
        }
    }

    /// Invoke the callback registered for `phase`, if any.
    ///
    /// Panics raised by the callback propagate to the caller.
    pub fn invoke(&mut self, phase: TransitionPhase, node: &N, appearing: bool) {
        let enter = match phase {
            TransitionPhase::EnterStart => &mut self.on_enter,
            TransitionPhase::EnterActive => &mut self.on_entering,
            TransitionPhase::EnterDone => &mut self.on_entered,
            TransitionPhase::ExitStart => return call_exit(&mut self.on_exit, node),
            TransitionPhase::ExitActive => return call_exit(&mut self.on_exiting, node),
            TransitionPhase::ExitDone => return call_exit(&mut self.on_exited, node),
        };
        if let Some(callback) = enter.as_mut() {
            callback(node, appearing);
        }
    }
}

fn call_exit<N>(callback: &mut Option<ExitCallback<N>>, node: &N) {
    if let Some(callback) = callback.as_mut() {
        callback(node);
    }
}

impl<N> fmt::Debug for TransitionCallbacks<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionCallbacks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_entering", &self.on_entering.is_some())
            .field("on_entered", &self.on_entered.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("on_exiting", &self.on_exiting.is_some())
            .field("on_exited", &self.on_exited.is_some())
            .finish()
    }
}
