//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, History, IdSpace, State, Transition, Trigger};
use crate::engine::{DebugHook, Fsm};
use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::rc::Rc;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::builder::FsmBuilder;
/// use reactive_fsm::core::{IdSpace, Transition};
///
/// let ids = IdSpace::new();
/// let on = ids.state();
/// let flip = ids.event();
///
/// let mut fsm = FsmBuilder::new(&ids)
///     .name("switch")
///     .transition(Transition::new(ids.initial(), &on, &flip))
///     .history_limit(16)
///     .strict()
///     .initialized()
///     .build()
///     .unwrap();
///
/// fsm.execute(&flip).unwrap();
/// assert_eq!(fsm.state(), &on);
/// assert_eq!(fsm.history().map(|h| h.len()), Some(1));
/// ```
pub struct FsmBuilder<'a, E: Trigger = Event> {
    ids: &'a IdSpace,
    name: Option<Cow<'static, str>>,
    transitions: Vec<Transition<'a, E>>,
    debug_hook: Option<DebugHook<'a, E>>,
    history: Option<Result<History, BuildError>>,
    strict: bool,
    initialized: bool,
}

impl<'a, E: Trigger> FsmBuilder<'a, E> {
    /// Create a new builder for a machine over the pseudo-states of `ids`.
    pub fn new(ids: &'a IdSpace) -> Self {
        Self {
            ids,
            name: None,
            transitions: Vec::new(),
            debug_hook: None,
            history: None,
            strict: false,
            initialized: false,
        }
    }

    /// Name reported in log events.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add one transition.
    pub fn transition(mut self, transition: Transition<'a, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<'a, E>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Observe every fired transition.
    pub fn debug_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&State, &State, &E) + 'a,
    {
        self.debug_hook = Some(Rc::new(hook));
        self
    }

    /// Record every fired transition without bound.
    pub fn history(mut self) -> Self {
        self.history = Some(Ok(History::new()));
        self
    }

    /// Record fired transitions, keeping only the most recent `limit`.
    ///
    /// A limit of 0 makes [`build`](Self::build) fail with
    /// [`BuildError::ZeroHistoryLimit`].
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history = Some(
            NonZeroUsize::new(limit)
                .map(History::bounded)
                .ok_or(BuildError::ZeroHistoryLimit),
        );
        self
    }

    /// Refuse to build a model that breaks the Initial/Final conventions.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Call `init()` on the built machine.
    pub fn initialized(mut self) -> Self {
        self.initialized = true;
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<Fsm<'a, E>, BuildError> {
        let history = self.history.transpose()?;

        let space = self.ids.serial();
        if let Some(foreign) = self.transitions.iter().find(|t| !t.belongs_to(space)) {
            return Err(BuildError::ForeignTransition {
                from: foreign.from_state().id(),
                to: foreign.to_state().id(),
                trigger: foreign.trigger_id(),
            });
        }

        let mut fsm = Fsm::new(self.ids);
        if let Some(name) = self.name {
            fsm = fsm.named(name);
        }
        fsm.add_transitions(self.transitions);

        if self.strict {
            fsm.validate().map_err(BuildError::InvalidModel)?;
        }

        fsm.set_debug_hook(self.debug_hook);
        if let Some(history) = history {
            fsm.record_history(history);
        }
        if self.initialized {
            fsm.init();
        }

        Ok(fsm)
    }
}
