//! Transition records linking two states through a trigger.

use super::event::Trigger;
use super::id::{EventId, StateId};
use super::state::State;
use std::fmt;
use std::rc::Rc;

/// Predicate gating whether a matched transition fires.
///
/// Guards must return the same value when evaluated repeatedly within one
/// dispatch.
pub type Guard<'a> = Rc<dyn Fn() -> bool + 'a>;

/// Procedure run when a transition fires. Receives the dispatched trigger.
pub type Action<'a, E> = Rc<dyn Fn(&E) + 'a>;

/// An immutable edge of the machine: `from --trigger [guard] / action--> to`.
///
/// States and the trigger pattern are borrowed; the caller keeps them alive
/// for as long as the machine holding this transition. Cloning is cheap and
/// shares the guard and action.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::{IdSpace, Transition};
///
/// let ids = IdSpace::new();
/// let idle = ids.state();
/// let go = ids.event();
///
/// let t = Transition::new(ids.initial(), &idle, &go)
///     .guard(|| true)
///     .action(|_trigger| println!("starting"));
///
/// assert!(t.is_triggered_by(&go));
/// assert!(t.guard_allows());
/// ```
pub struct Transition<'a, E> {
    from: &'a State,
    to: &'a State,
    trigger: &'a E,
    guard: Option<Guard<'a>>,
    action: Option<Action<'a, E>>,
}

impl<'a, E: Trigger> Transition<'a, E> {
    /// A transition without guard or action.
    pub fn new(from: &'a State, to: &'a State, trigger: &'a E) -> Self {
        Self {
            from,
            to,
            trigger,
            guard: None,
            action: None,
        }
    }

    /// Attach a guard predicate, replacing any previous one.
    pub fn guard<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        self.guard = Some(Rc::new(predicate));
        self
    }

    /// Attach an action, replacing any previous one.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&E) + 'a,
    {
        self.action = Some(Rc::new(action));
        self
    }

    /// Replace the guard with an existing handle. `None` removes it.
    pub fn with_guard(mut self, guard: Option<Guard<'a>>) -> Self {
        self.guard = guard;
        self
    }

    /// Replace the action with an existing handle. `None` removes it.
    pub fn with_action(mut self, action: Option<Action<'a, E>>) -> Self {
        self.action = action;
        self
    }

    pub fn from_state(&self) -> &'a State {
        self.from
    }

    pub fn to_state(&self) -> &'a State {
        self.to
    }

    pub fn trigger(&self) -> &'a E {
        self.trigger
    }

    pub fn trigger_id(&self) -> EventId {
        self.trigger.id()
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Whether `trigger` shares this transition's trigger identity.
    pub fn is_triggered_by(&self, trigger: &E) -> bool {
        self.trigger.id() == trigger.id()
    }

    /// Evaluate the guard. A missing guard always allows.
    pub fn guard_allows(&self) -> bool {
        self.guard.as_ref().is_none_or(|guard| guard())
    }

    /// Whether both states and the trigger were allocated by the
    /// [`IdSpace`](super::IdSpace) with serial `space`.
    pub fn belongs_to(&self, space: u64) -> bool {
        self.from.id().space() == space
            && self.to.id().space() == space
            && self.trigger.id().space() == space
    }

    pub(crate) fn run_action(&self, trigger: &E) {
        if let Some(action) = &self.action {
            action(trigger);
        }
    }

    pub(crate) fn endpoints(&self) -> (StateId, StateId) {
        (self.from.id(), self.to.id())
    }
}

impl<E> Clone for Transition<'_, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from,
            to: self.to,
            trigger: self.trigger,
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}

impl<E: Trigger> fmt::Debug for Transition<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from.id())
            .field("to", &self.to.id())
            .field("trigger", &self.trigger.id())
            .field("guard", &self.guard.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdSpace;
    use std::cell::Cell;

    #[test]
    fn matches_only_its_own_trigger() {
        let ids = IdSpace::new();
        let a = ids.event();
        let b = ids.event();
        let t = Transition::new(ids.initial(), ids.final_state(), &a);

        assert!(t.is_triggered_by(&a));
        assert!(!t.is_triggered_by(&b));
        assert_eq!(t.trigger_id(), a.id());
    }

    #[test]
    fn matches_other_value_with_same_identity() {
        let ids = IdSpace::new();
        let pattern = ids.event_with(0u8);
        let t = Transition::new(ids.initial(), ids.final_state(), &pattern);

        assert!(t.is_triggered_by(&pattern.with_payload(42u8)));
    }

    #[test]
    fn belongs_only_to_the_space_of_every_identity() {
        let home = IdSpace::new();
        let away = IdSpace::new();
        let (home_go, away_go) = (home.event(), away.event());
        let away_state = away.state();

        let local = Transition::new(home.initial(), home.final_state(), &home_go);
        let foreign_trigger = Transition::new(home.initial(), home.final_state(), &away_go);
        let foreign_target = Transition::new(home.initial(), &away_state, &home_go);

        assert!(local.belongs_to(home.serial()));
        assert!(!local.belongs_to(away.serial()));
        assert!(!foreign_trigger.belongs_to(home.serial()));
        assert!(!foreign_target.belongs_to(home.serial()));
    }

    #[test]
    fn missing_guard_allows() {
        let ids = IdSpace::new();
        let a = ids.event();
        let t = Transition::new(ids.initial(), ids.final_state(), &a);

        assert!(!t.has_guard());
        assert!(t.guard_allows());
    }

    #[test]
    fn guard_result_is_respected() {
        let ids = IdSpace::new();
        let a = ids.event();
        let open = Cell::new(false);
        let t = Transition::new(ids.initial(), ids.final_state(), &a).guard(|| open.get());

        assert!(!t.guard_allows());
        open.set(true);
        assert!(t.guard_allows());
    }

    #[test]
    fn action_receives_dispatched_trigger() {
        let ids = IdSpace::new();
        let pattern = ids.event_with(0i32);
        let seen = Cell::new(0);
        let t = Transition::new(ids.initial(), ids.final_state(), &pattern)
            .action(|e: &crate::core::Event<i32>| seen.set(*e.payload()));

        t.run_action(&pattern.with_payload(7));

        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn clone_shares_callables() {
        let ids = IdSpace::new();
        let a = ids.event();
        let calls = Cell::new(0);
        let t = Transition::new(ids.initial(), ids.final_state(), &a)
            .action(|_| calls.set(calls.get() + 1));
        let copy = t.clone();

        t.run_action(&a);
        copy.run_action(&a);

        assert_eq!(calls.get(), 2);
        assert_eq!(copy.endpoints(), t.endpoints());
    }

    #[test]
    fn with_guard_none_removes_guard() {
        let ids = IdSpace::new();
        let a = ids.event();
        let t = Transition::new(ids.initial(), ids.final_state(), &a)
            .guard(|| false)
            .with_guard(None);

        assert!(t.guard_allows());
    }
}
