//! Append-only transition table keyed by source state.

use super::event::Trigger;
use super::id::StateId;
use super::transition::Transition;
use super::validate::ModelViolation;
use std::collections::BTreeMap;

/// Transitions grouped by the identity of their source state.
///
/// Within a group, registration order is preserved; dispatch relies on it
/// to pick the first eligible transition. Nothing is ever removed.
pub struct TransitionTable<'a, E> {
    by_source: BTreeMap<StateId, Vec<Transition<'a, E>>>,
    len: usize,
}

impl<E> Default for TransitionTable<'_, E> {
    fn default() -> Self {
        Self {
            by_source: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<'a, E: Trigger> TransitionTable<'a, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transition after all transitions sharing its source.
    pub fn add(&mut self, transition: Transition<'a, E>) {
        self.by_source
            .entry(transition.from_state().id())
            .or_default()
            .push(transition);
        self.len += 1;
    }

    /// Transitions registered for `from`, in registration order.
    pub fn get(&self, from: StateId) -> Option<&[Transition<'a, E>]> {
        self.by_source.get(&from).map(Vec::as_slice)
    }

    /// Total number of registered transitions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source states that have at least one outgoing transition.
    pub fn from_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.by_source.keys().copied()
    }

    /// Every transition, grouped by ascending source identity.
    pub fn iter(&self) -> impl Iterator<Item = &Transition<'a, E>> + '_ {
        self.by_source.values().flatten()
    }

    /// Collect every breach of the Initial/Final conventions.
    ///
    /// An empty result means the table is well formed.
    pub fn violations(&self, initial: StateId, final_state: StateId) -> Vec<ModelViolation> {
        let mut violations = Vec::new();

        if self.get(initial).is_none_or(<[_]>::is_empty) {
            violations.push(ModelViolation::MissingInitialTransition);
        }

        for transition in self.iter() {
            let (from, to) = transition.endpoints();
            if to == initial {
                violations.push(ModelViolation::IncomingToInitial { from });
            }
            if from == final_state {
                violations.push(ModelViolation::OutgoingFromFinal { to });
            }
        }

        violations
    }
}

impl<'a, E: Trigger> Extend<Transition<'a, E>> for TransitionTable<'a, E> {
    fn extend<I: IntoIterator<Item = Transition<'a, E>>>(&mut self, iter: I) {
        for transition in iter {
            self.add(transition);
        }
    }
}

impl<'a, E: Trigger> FromIterator<Transition<'a, E>> for TransitionTable<'a, E> {
    fn from_iter<I: IntoIterator<Item = Transition<'a, E>>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
