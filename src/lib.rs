//! Reactive FSM: an embeddable finite state machine core
//!
//! A machine does nothing until it receives a trigger. When it does, it looks
//! up the transitions leaving the current state, picks the first one (in
//! registration order) whose trigger identity matches and whose guard allows
//! it, runs its action, swaps the current state while running exit and enter
//! hooks, and notifies an optional debug hook. At most one transition fires
//! per trigger.
//!
//! # Core Concepts
//!
//! - **IdSpace**: Hands out state and event identities and owns the Initial
//!   and Final pseudo-states
//! - **State**: Identity plus optional enter/exit hooks
//! - **Trigger**: Anything with an event identity; `Event<P>` carries a payload
//! - **Transition**: `from --trigger [guard] / action--> to`
//! - **Fsm**: The dispatch engine
//!
//! # Example
//!
//! ```rust
//! use reactive_fsm::core::{IdSpace, Transition};
//! use reactive_fsm::engine::ExecuteError;
//! use std::cell::Cell;
//!
//! let ids = IdSpace::new();
//! let locked = ids.state();
//! let unlocked = ids.state();
//! let coin = ids.event_with(0u32);
//! let push = ids.event_with(0u32);
//!
//! let paid = Cell::new(0);
//! let mut fsm = ids.fsm();
//! fsm.add_transitions([
//!     Transition::new(ids.initial(), &locked, &push),
//!     Transition::new(&locked, &unlocked, &coin)
//!         .guard(|| paid.get() < 100)
//!         .action(|e| paid.set(paid.get() + e.payload())),
//!     Transition::new(&unlocked, &locked, &push),
//! ]);
//!
//! assert_eq!(fsm.execute(&push), Err(ExecuteError::NotInitialized));
//!
//! fsm.init();
//! fsm.execute(&push).unwrap();
//! fsm.execute(&coin.with_payload(25)).unwrap();
//! assert_eq!(fsm.state(), &unlocked);
//! assert_eq!(paid.get(), 25);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, FsmBuilder};
pub use self::core::{Event, EventId, IdSpace, State, StateId, Transition, Trigger};
pub use engine::{Dispatch, ExecuteError, Fsm};
