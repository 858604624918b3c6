//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder for configuring machines (name,
//! debug hook, history, strict validation) and the [`transitions!`](crate::transitions)
//! macro for writing transition tables as literals.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;
