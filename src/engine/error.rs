//! Dispatch outcomes and errors.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// What a successful dispatch did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A transition fired and the machine moved from `from` to `to`
    Transitioned { from: StateId, to: StateId },

    /// The trigger is recognized by the current state but every matching
    /// transition was guarded off; nothing ran
    Blocked,
}

impl Dispatch {
    /// Whether a transition actually fired.
    pub fn fired(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Errors returned by [`Fsm::execute`](super::Fsm::execute).
///
/// Both variants are recoverable: ignore unmatched triggers, or call
/// `init()` and dispatch again.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("no transition from state {state} is triggered by {trigger}")]
    NoMatchingTrigger { state: StateId, trigger: EventId },

    #[error("state machine is not initialized, call init() first")]
    NotInitialized,
}

impl ExecuteError {
    /// Numeric status code. Success is 0 and is represented by `Ok`.
    pub fn code(&self) -> u8 {
        match self {
            Self::NoMatchingTrigger { .. } => 1,
            Self::NotInitialized => 2,
        }
    }

    /// Warnings are expected in normal operation; the rest indicate misuse.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NoMatchingTrigger { .. })
    }
}

/// Result of dispatching a trigger.
pub type ExecuteResult = Result<Dispatch, ExecuteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdSpace;

    #[test]
    fn codes_follow_severity() {
        let ids = IdSpace::new();
        let unmatched = ExecuteError::NoMatchingTrigger {
            state: ids.initial().id(),
            trigger: ids.event_id(),
        };

        assert_eq!(unmatched.code(), 1);
        assert_eq!(ExecuteError::NotInitialized.code(), 2);
        assert!(unmatched.is_warning());
        assert!(!ExecuteError::NotInitialized.is_warning());
    }

    #[test]
    fn messages_identify_state_and_trigger() {
        let ids = IdSpace::new();
        let err = ExecuteError::NoMatchingTrigger {
            state: ids.final_state().id(),
            trigger: ids.event_id(),
        };

        assert_eq!(
            err.to_string(),
            "no transition from state s1 is triggered by e0"
        );
    }

    #[test]
    fn only_transitioned_counts_as_fired() {
        let ids = IdSpace::new();
        let moved = Dispatch::Transitioned {
            from: ids.initial().id(),
            to: ids.final_state().id(),
        };

        assert!(moved.fired());
        assert!(!Dispatch::Blocked.fired());
    }
}
