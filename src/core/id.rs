//! Identity allocation for states and events.
//!
//! Every [`State`] and [`Event`] carries an identity handed out by an
//! [`IdAllocator`]. Identities are what transition matching compares, so an
//! allocator never reuses a value and refuses to wrap around.
//!
//! Each identity is also tagged with the serial of the [`IdSpace`] that
//! allocated it. Serials come from one process-wide counter, so identities
//! from two spaces never compare equal even though each space numbers its
//! states from 0.

use super::event::Event;
use super::state::State;
use crate::engine::Fsm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Serials of every [`IdSpace`] created in this process.
static SPACES: IdAllocator = IdAllocator::new();

/// Identity of a [`State`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct StateId {
    space: u64,
    value: u64,
}

/// Identity of an [`Event`] or any other [`Trigger`](super::Trigger).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct EventId {
    space: u64,
    value: u64,
}

impl StateId {
    /// Raw numeric value of the identity within its space.
    pub fn get(self) -> u64 {
        self.value
    }

    /// Serial of the [`IdSpace`] that allocated this identity.
    pub fn space(self) -> u64 {
        self.space
    }
}

impl EventId {
    /// Raw numeric value of the identity within its space.
    pub fn get(self) -> u64 {
        self.value
    }

    /// Serial of the [`IdSpace`] that allocated this identity.
    pub fn space(self) -> u64 {
        self.space
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.value)
    }
}

/// Monotonic identity counter.
///
/// Values start at 0 and strictly increase. Running out of identities is a
/// modeling error, not a runtime fault, so [`next`](Self::next) panics
/// instead of wrapping.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::IdAllocator;
///
/// let ids = IdAllocator::new();
/// assert_eq!(ids.next(), 0);
/// assert_eq!(ids.next(), 1);
/// assert_eq!(ids.peek(), 2);
/// ```
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first identity is 0.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate a fresh identity.
    ///
    /// # Panics
    ///
    /// Panics if the counter would overflow.
    pub fn next(&self) -> u64 {
        match self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        {
            Ok(id) => id,
            Err(_) => panic!("identity space exhausted: allocator would wrap past u64::MAX"),
        }
    }

    /// The identity the next call to [`next`](Self::next) would return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u64) -> Self {
        Self {
            next: AtomicU64::new(next),
        }
    }
}

/// An identity namespace: one counter per kind plus the two pseudo-states.
///
/// `IdSpace::new()` creates the Initial pseudo-state first and the Final
/// pseudo-state second, so they always carry identities 0 and 1. Every
/// space draws a fresh serial from a process-wide counter and stamps it on
/// the identities it allocates. A machine created from one space refuses
/// transitions built from another space's states or events.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::IdSpace;
///
/// let ids = IdSpace::new();
/// assert_eq!(ids.initial().id().get(), 0);
/// assert_eq!(ids.final_state().id().get(), 1);
///
/// let idle = ids.state();
/// assert_eq!(idle.id().get(), 2);
///
/// let start = ids.event();
/// assert_eq!(start.id().get(), 0);
/// ```
#[derive(Debug)]
pub struct IdSpace {
    serial: u64,
    states: IdAllocator,
    events: IdAllocator,
    initial: State,
    final_state: State,
}

impl Default for IdSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSpace {
    pub fn new() -> Self {
        let serial = SPACES.next();
        let states = IdAllocator::new();
        let initial = State::with_id(StateId {
            space: serial,
            value: states.next(),
        });
        let final_state = State::with_id(StateId {
            space: serial,
            value: states.next(),
        });
        Self {
            serial,
            states,
            events: IdAllocator::new(),
            initial,
            final_state,
        }
    }

    /// Create a new state with a fresh identity and no hooks.
    pub fn state(&self) -> State {
        State::with_id(self.state_id())
    }

    /// Create a new payload-less event.
    pub fn event(&self) -> Event {
        Event::new(self.event_id(), ())
    }

    /// Create a new event carrying `payload`.
    pub fn event_with<P>(&self, payload: P) -> Event<P> {
        Event::new(self.event_id(), payload)
    }

    /// Allocate a raw state identity.
    pub fn state_id(&self) -> StateId {
        StateId {
            space: self.serial,
            value: self.states.next(),
        }
    }

    /// Allocate a raw event identity, for custom [`Trigger`](super::Trigger) types.
    pub fn event_id(&self) -> EventId {
        EventId {
            space: self.serial,
            value: self.events.next(),
        }
    }

    /// Process-unique serial stamped on every identity of this space.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// The Initial pseudo-state.
    pub fn initial(&self) -> &State {
        &self.initial
    }

    /// The Final pseudo-state.
    pub fn final_state(&self) -> &State {
        &self.final_state
    }

    /// Create an empty, uninitialized machine bound to this space's pseudo-states.
    pub fn fsm<E: super::Trigger>(&self) -> Fsm<'_, E> {
        Fsm::new(self)
    }
}
