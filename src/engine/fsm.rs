//! The dispatch engine.

use super::error::{Dispatch, ExecuteError, ExecuteResult};
use crate::core::{
    Event, History, IdSpace, ModelViolation, State, Transition, TransitionRecord,
    TransitionTable, Trigger,
};
use chrono::Utc;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Observer called with `(from, to, trigger)` after every fired transition.
pub type DebugHook<'a, E> = Rc<dyn Fn(&State, &State, &E) + 'a>;

/// A reactive finite state machine.
///
/// The machine owns its transition table and a pointer to the current
/// state; states and trigger patterns are borrowed from the caller for `'a`.
/// It does nothing until a trigger is dispatched with [`execute`](Self::execute).
///
/// Lifecycle: a new machine is uninitialized. [`init`](Self::init) moves it
/// to the Initial pseudo-state; [`reset`](Self::reset) makes it
/// uninitialized again. Transitions may be added in either phase and are
/// never removed.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::{IdSpace, Transition};
/// use reactive_fsm::engine::Dispatch;
///
/// let ids = IdSpace::new();
/// let idle = ids.state();
/// let (start, stop) = (ids.event(), ids.event());
///
/// let mut fsm = ids.fsm();
/// fsm.add_transitions([
///     Transition::new(ids.initial(), &idle, &start),
///     Transition::new(&idle, ids.final_state(), &stop),
/// ]);
/// fsm.init();
///
/// assert!(fsm.is_initial());
/// assert!(fsm.execute(&start).is_ok());
/// assert_eq!(fsm.state(), &idle);
/// assert!(fsm.execute(&start).is_err()); // idle does not react to start
/// assert_eq!(
///     fsm.execute(&stop),
///     Ok(Dispatch::Transitioned { from: idle.id(), to: ids.final_state().id() })
/// );
/// assert!(fsm.is_final());
/// ```
pub struct Fsm<'a, E: Trigger = Event> {
    name: Cow<'static, str>,
    initial: &'a State,
    final_state: &'a State,
    table: TransitionTable<'a, E>,
    current: &'a State,
    initialized: bool,
    debug_hook: Option<DebugHook<'a, E>>,
    history: Option<History>,
}

impl<'a, E: Trigger> Fsm<'a, E> {
    /// An empty, uninitialized machine using the pseudo-states of `ids`.
    pub fn new(ids: &'a IdSpace) -> Self {
        Self {
            name: Cow::Borrowed("fsm"),
            initial: ids.initial(),
            final_state: ids.final_state(),
            table: TransitionTable::new(),
            current: ids.initial(),
            initialized: false,
            debug_hook: None,
            history: None,
        }
    }

    /// Set the name reported in log events.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind the current state to Initial. No-op once initialized.
    pub fn init(&mut self) {
        if !self.initialized {
            self.current = self.initial;
            self.initialized = true;
            debug!(machine = %self.name, "state machine initialized");
        }
    }

    /// Rewind to Initial and require another `init()` before dispatching.
    ///
    /// Registered transitions are kept; recorded history is cleared.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.initialized = false;
        if let Some(history) = &mut self.history {
            history.clear();
        }
        debug!(machine = %self.name, "state machine reset");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Register transitions, keeping their relative order.
    ///
    /// # Panics
    ///
    /// Panics if a transition uses a state or trigger allocated by another
    /// [`IdSpace`], like [`add_transition`](Self::add_transition).
    pub fn add_transitions<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<'a, E>>,
    {
        for transition in transitions {
            self.add_transition(transition);
        }
    }

    /// Register one transition after those already leaving its source.
    ///
    /// # Panics
    ///
    /// Panics if the transition uses a state or trigger allocated by an
    /// [`IdSpace`] other than the one this machine was created from.
    pub fn add_transition(&mut self, transition: Transition<'a, E>) {
        if !transition.belongs_to(self.space()) {
            panic!(
                "transition {} -> {} on {} was built from another IdSpace than machine `{}`",
                transition.from_state().id(),
                transition.to_state().id(),
                transition.trigger_id(),
                self.name
            );
        }
        self.table.add(transition);
    }

    /// Serial of the [`IdSpace`] this machine was created from.
    pub fn space(&self) -> u64 {
        self.initial.id().space()
    }

    /// Replace the debug hook. `None` disables notifications.
    pub fn set_debug_hook(&mut self, hook: Option<DebugHook<'a, E>>) {
        self.debug_hook = hook;
    }

    /// Install `hook` as the debug hook.
    pub fn on_transition<F>(&mut self, hook: F)
    where
        F: Fn(&State, &State, &E) + 'a,
    {
        self.set_debug_hook(Some(Rc::new(hook)));
    }

    pub fn has_debug_hook(&self) -> bool {
        self.debug_hook.is_some()
    }

    /// Start recording fired transitions into `history`.
    pub fn record_history(&mut self, history: History) {
        self.history = Some(history);
    }

    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Dispatch one trigger.
    ///
    /// Transitions leaving the current state are scanned in registration
    /// order. The first one whose trigger identity matches and whose guard
    /// allows it fires: its action runs with `trigger`, the source state's
    /// exit hook runs, the current state changes, the target's enter hook
    /// runs, then the debug hook is notified. At most one transition fires.
    ///
    /// Returns [`Dispatch::Blocked`] when the trigger matched but every
    /// matching guard said no, and [`ExecuteError::NoMatchingTrigger`] when
    /// nothing matched at all. An uninitialized machine returns
    /// [`ExecuteError::NotInitialized`] without side effects.
    pub fn execute(&mut self, trigger: &E) -> ExecuteResult {
        let trigger_id = trigger.id();
        if !self.initialized {
            warn!(
                machine = %self.name,
                trigger = %trigger_id,
                "trigger dispatched to uninitialized state machine"
            );
            return Err(ExecuteError::NotInitialized);
        }

        let state = self.current.id();
        let unmatched = ExecuteError::NoMatchingTrigger {
            state,
            trigger: trigger_id,
        };

        let Some(candidates) = self.table.get(state) else {
            trace!(machine = %self.name, %state, trigger = %trigger_id, "no transitions leave state");
            return Err(unmatched);
        };

        let mut recognized = false;
        for transition in candidates.iter().filter(|t| t.trigger_id() == trigger_id) {
            recognized = true;
            if !transition.guard_allows() {
                trace!(
                    machine = %self.name,
                    %state,
                    to = %transition.to_state().id(),
                    trigger = %trigger_id,
                    "guard rejected transition"
                );
                continue;
            }

            let (from, to) = (transition.from_state(), transition.to_state());
            transition.run_action(trigger);
            from.invoke_exit();
            self.current = to;
            to.invoke_enter();

            if let Some(hook) = &self.debug_hook {
                hook(from, to, trigger);
            }
            if let Some(history) = &mut self.history {
                history.record(TransitionRecord {
                    from: from.id(),
                    to: to.id(),
                    trigger: trigger_id,
                    timestamp: Utc::now(),
                });
            }

            debug!(
                machine = %self.name,
                from = %from.id(),
                to = %to.id(),
                trigger = %trigger_id,
                "transition fired"
            );
            return Ok(Dispatch::Transitioned {
                from: from.id(),
                to: to.id(),
            });
        }

        if recognized {
            trace!(machine = %self.name, %state, trigger = %trigger_id, "all matching transitions guarded off");
            Ok(Dispatch::Blocked)
        } else {
            trace!(machine = %self.name, %state, trigger = %trigger_id, "trigger not recognized");
            Err(unmatched)
        }
    }

    /// The current state.
    pub fn state(&self) -> &'a State {
        self.current
    }

    pub fn is_initial(&self) -> bool {
        self.current.id() == self.initial.id()
    }

    pub fn is_final(&self) -> bool {
        self.current.id() == self.final_state.id()
    }

    pub fn initial_state(&self) -> &'a State {
        self.initial
    }

    pub fn final_state(&self) -> &'a State {
        self.final_state
    }

    pub fn transitions(&self) -> &TransitionTable<'a, E> {
        &self.table
    }

    /// Check the Initial/Final conventions, reporting every breach.
    pub fn validate(&self) -> Result<(), Vec<ModelViolation>> {
        let violations = self
            .table
            .violations(self.initial.id(), self.final_state.id());
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<E: Trigger> fmt::Debug for Fsm<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("name", &self.name)
            .field("current", &self.current.id())
            .field("initialized", &self.initialized)
            .field("transitions", &self.table.len())
            .field("debug_hook", &self.debug_hook.is_some())
            .field("history", &self.history.as_ref().map(History::len))
            .finish()
    }
}
