//! Core data model of the state machine.
//!
//! This module contains the building blocks the engine evaluates:
//! - Identity allocation and the Initial/Final pseudo-states
//! - States with enter/exit hooks
//! - Triggers and the stock `Event` type
//! - Transitions and the append-only transition table
//! - Optional history of fired transitions
//! - Convention checks for transition tables

mod event;
mod history;
mod id;
mod state;
mod table;
mod transition;
pub mod validate;

pub use event::{Event, Trigger};
pub use history::{History, TransitionRecord};
pub use id::{EventId, IdAllocator, IdSpace, StateId};
pub use state::{State, StateHook};
pub use table::TransitionTable;
pub use transition::{Action, Guard, Transition};
pub use validate::ModelViolation;
