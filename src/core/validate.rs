//! Convention checks for transition tables.
//!
//! The engine never enforces these rules during dispatch. They exist so a
//! host can catch modeling mistakes up front, and every breach is reported
//! at once rather than one per run.

use super::id::StateId;
use thiserror::Error;

/// A breach of the Initial/Final pseudo-state conventions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ModelViolation {
    #[error("no transition leaves the initial pseudo-state")]
    MissingInitialTransition,

    #[error("transition from state {from} enters the initial pseudo-state")]
    IncomingToInitial { from: StateId },

    #[error("transition to state {to} leaves the final pseudo-state")]
    OutgoingFromFinal { to: StateId },
}

/// Render a list of violations as a single `; `-separated message.
pub fn describe(violations: &[ModelViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
