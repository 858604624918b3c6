//! Triggers: identity-bearing stimuli dispatched to a machine.

use super::id::EventId;

/// Anything that can be dispatched to a machine.
///
/// The engine only ever inspects a trigger's identity. A transition fires
/// for a dispatched trigger whose identity equals the identity of the
/// trigger registered with the transition.
pub trait Trigger {
    fn id(&self) -> EventId;
}

impl<T: Trigger + ?Sized> Trigger for &T {
    fn id(&self) -> EventId {
        (**self).id()
    }
}

/// The stock trigger type: an identity plus a caller-defined payload.
///
/// Every event created by an [`IdSpace`](super::IdSpace) is its own trigger
/// kind. To dispatch the same kind with different data, derive a new value
/// with [`with_payload`](Self::with_payload), which keeps the identity.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::IdSpace;
///
/// let ids = IdSpace::new();
/// let coin = ids.event_with(0u32);
/// let quarter = coin.with_payload(25u32);
///
/// assert_eq!(coin.id(), quarter.id());
/// assert_eq!(*quarter.payload(), 25);
/// ```
#[derive(Clone, Debug)]
pub struct Event<P = ()> {
    id: EventId,
    payload: P,
}

impl<P> Event<P> {
    pub(crate) fn new(id: EventId, payload: P) -> Self {
        Self { id, payload }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    /// A new event with the same identity carrying `payload`.
    pub fn with_payload<Q>(&self, payload: Q) -> Event<Q> {
        Event {
            id: self.id,
            payload,
        }
    }
}

impl<P> Trigger for Event<P> {
    fn id(&self) -> EventId {
        self.id
    }
}

impl<P> PartialEq for Event<P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P> Eq for Event<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdSpace;

    #[test]
    fn events_get_distinct_identities() {
        let ids = IdSpace::new();
        let a = ids.event();
        let b = ids.event();

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn equality_ignores_payload() {
        let ids = IdSpace::new();
        let reading = ids.event_with(10);
        let later = reading.with_payload(99);

        assert_eq!(reading, later);
        assert_eq!(*later.payload(), 99);
    }

    #[test]
    fn payload_can_be_taken_back() {
        let ids = IdSpace::new();
        let msg = ids.event_with(String::from("hello"));

        assert_eq!(msg.into_payload(), "hello");
    }

    #[test]
    fn references_forward_identity() {
        let ids = IdSpace::new();
        let e = ids.event();
        let r = &e;

        assert_eq!(Trigger::id(&r), e.id());
    }

    #[test]
    fn custom_triggers_use_space_identities() {
        struct Tick {
            id: EventId,
        }

        impl Trigger for Tick {
            fn id(&self) -> EventId {
                self.id
            }
        }

        let ids = IdSpace::new();
        let tick = Tick { id: ids.event_id() };
        let other = ids.event();

        assert_ne!(tick.id(), other.id());
    }
}
