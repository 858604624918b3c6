//! The reactive dispatch engine.
//!
//! [`Fsm`] owns a transition table and the current-state pointer, and
//! evaluates one trigger at a time on the calling thread:
//! lookup, guard evaluation, first-match tie-break, action, exit hook,
//! state change, enter hook, debug notification.
//!
//! Dispatch outcomes are values. Success is `Ok(Dispatch)`; unmatched
//! triggers and dispatch before `init()` are [`ExecuteError`]s.

mod error;
mod fsm;

pub use error::{Dispatch, ExecuteError, ExecuteResult};
pub use fsm::{DebugHook, Fsm};
