//! States: identity-bearing nodes of a machine's graph.
//!
//! A state carries optional enter and exit hooks. Hooks are replaced as a
//! whole and can be changed through a shared reference, so a state that is
//! already referenced by registered transitions can still be instrumented.

use super::id::StateId;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Procedure invoked when a state becomes, or stops being, the current state.
pub type StateHook = Rc<dyn Fn()>;

/// A node in the machine's graph.
///
/// Two states are equal iff their identities are equal. States are created
/// by an [`IdSpace`](super::IdSpace) and owned by the caller; machines only
/// borrow them.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::IdSpace;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ids = IdSpace::new();
/// let open = ids.state();
///
/// let entered = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&entered);
/// open.on_enter(move || counter.set(counter.get() + 1));
///
/// open.invoke_enter();
/// open.invoke_exit(); // no exit hook: no-op
/// assert_eq!(entered.get(), 1);
///
/// open.set_enter_hook(None);
/// open.invoke_enter();
/// assert_eq!(entered.get(), 1);
/// ```
pub struct State {
    id: StateId,
    enter: RefCell<Option<StateHook>>,
    exit: RefCell<Option<StateHook>>,
}

impl State {
    pub(crate) fn with_id(id: StateId) -> Self {
        Self {
            id,
            enter: RefCell::new(None),
            exit: RefCell::new(None),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    /// Replace the enter hook. `None` removes it.
    pub fn set_enter_hook(&self, hook: Option<StateHook>) {
        *self.enter.borrow_mut() = hook;
    }

    /// Replace the exit hook. `None` removes it.
    pub fn set_exit_hook(&self, hook: Option<StateHook>) {
        *self.exit.borrow_mut() = hook;
    }

    /// Install `hook` as the enter hook.
    pub fn on_enter<F>(&self, hook: F)
    where
        F: Fn() + 'static,
    {
        self.set_enter_hook(Some(Rc::new(hook)));
    }

    /// Install `hook` as the exit hook.
    pub fn on_exit<F>(&self, hook: F)
    where
        F: Fn() + 'static,
    {
        self.set_exit_hook(Some(Rc::new(hook)));
    }

    pub fn has_enter_hook(&self) -> bool {
        self.enter.borrow().is_some()
    }

    pub fn has_exit_hook(&self) -> bool {
        self.exit.borrow().is_some()
    }

    /// Call the enter hook if one is installed.
    pub fn invoke_enter(&self) {
        // Release the borrow before calling so the hook may replace itself.
        let hook = self.enter.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Call the exit hook if one is installed.
    pub fn invoke_exit(&self) {
        let hook = self.exit.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("enter_hook", &self.has_enter_hook())
            .field("exit_hook", &self.has_exit_hook())
            .finish()
    }
}
