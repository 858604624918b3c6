//! Transition history tracking.
//!
//! A machine can optionally log every transition that actually fires. The
//! log is plain data and serializes with serde; it describes a run, never the
//! machine definition.

use super::id::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Record of a single fired transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// Identity of the dispatched trigger
    pub trigger: EventId,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of fired transitions, optionally bounded.
///
/// When a limit is set, recording past it drops the oldest records.
///
/// # Example
///
/// ```rust
/// use reactive_fsm::core::{History, IdSpace, TransitionRecord};
/// use chrono::Utc;
///
/// let ids = IdSpace::new();
/// let running = ids.state();
/// let start = ids.event();
///
/// let mut history = History::new();
/// history.record(TransitionRecord {
///     from: ids.initial().id(),
///     to: running.id(),
///     trigger: start.id(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![ids.initial().id(), running.id()]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransitionRecord>,
    limit: Option<NonZeroUsize>,
}

impl History {
    /// An unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty history keeping at most `limit` records.
    pub fn bounded(limit: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Append a record, evicting the oldest ones beyond the limit.
    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
        if let Some(limit) = self.limit {
            let excess = self.records.len().saturating_sub(limit.get());
            self.records.drain(..excess);
        }
    }

    /// Recorded transitions, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// States traversed: the first record's source, then every target.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the first and last record, `None` if empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdSpace;

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn record(from: StateId, to: StateId, trigger: EventId) -> TransitionRecord {
        TransitionRecord {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.limit().is_none());
    }

    #[test]
    fn path_follows_recorded_targets() {
        let ids = IdSpace::new();
        let a = ids.state();
        let go = ids.event();
        let mut history = History::new();

        history.record(record(ids.initial().id(), a.id(), go.id()));
        history.record(record(a.id(), ids.final_state().id(), go.id()));

        assert_eq!(
            history.path(),
            vec![ids.initial().id(), a.id(), ids.final_state().id()]
        );
        assert_eq!(history.last().map(|r| r.to), Some(ids.final_state().id()));
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let ids = IdSpace::new();
        let states: Vec<_> = (0..4).map(|_| ids.state()).collect();
        let go = ids.event();
        let mut history = History::bounded(limit(2));

        for pair in states.windows(2) {
            history.record(record(pair[0].id(), pair[1].id(), go.id()));
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].from, states[1].id());
        assert_eq!(history.records()[1].to, states[3].id());
    }

    #[test]
    fn zero_limit_is_refused_on_deserialize() {
        let parsed = serde_json::from_str::<History>(r#"{"records":[],"limit":0}"#);
        assert!(parsed.is_err());

        let unbounded: History = serde_json::from_str(r#"{"records":[],"limit":null}"#).unwrap();
        assert!(unbounded.limit().is_none());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let ids = IdSpace::new();
        let a = ids.state();
        let go = ids.event();
        let mut history = History::new();

        history.record(record(ids.initial().id(), a.id(), go.id()));
        std::thread::sleep(Duration::from_millis(10));
        history.record(record(a.id(), ids.final_state().id(), go.id()));

        assert!(history.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn clear_empties_the_log() {
        let ids = IdSpace::new();
        let go = ids.event();
        let mut history = History::bounded(limit(5));

        history.record(record(ids.initial().id(), ids.final_state().id(), go.id()));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.limit(), Some(limit(5)));
    }

    #[test]
    fn history_serializes_correctly() {
        let ids = IdSpace::new();
        let go = ids.event();
        let mut history = History::bounded(limit(3));
        history.record(record(ids.initial().id(), ids.final_state().id(), go.id()));

        let json = serde_json::to_string(&history).unwrap();
        let restored: History = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.records(), history.records());
        assert_eq!(restored.limit(), Some(limit(3)));
    }
}
