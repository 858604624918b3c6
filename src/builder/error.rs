//! Build errors for the state machine builder.

use crate::core::validate::describe;
use crate::core::{EventId, ModelViolation, StateId};
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("state machine model is invalid: {}", describe(.0))]
    InvalidModel(Vec<ModelViolation>),

    #[error("history limit must be at least 1. Call .history() for an unbounded log")]
    ZeroHistoryLimit,

    #[error("transition {from} -> {to} on {trigger} was built from another IdSpace")]
    ForeignTransition {
        from: StateId,
        to: StateId,
        trigger: EventId,
    },
}
