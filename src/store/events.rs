//! Change notifications emitted by [`ExpenseStore`](super::ExpenseStore).

use uuid::Uuid;

use crate::expense::ExpenseRecord;

/// Describes the mutation that produced a [`ChangeEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added { index: usize, id: Uuid },
    /// Positions are relative to the ordering before the removal.
    Removed { indices: Vec<usize>, ids: Vec<Uuid> },
}

/// One committed mutation of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub revision: u64,
    pub kind: ChangeKind,
    /// `false` when the backend write for this mutation failed.
    pub persisted: bool,
}

/// Receives store notifications after each committed mutation.
pub trait StoreObserver {
    fn on_change(&mut self, event: &ChangeEvent, snapshot: &[ExpenseRecord]);
}

impl<F> StoreObserver for F
where
    F: FnMut(&ChangeEvent, &[ExpenseRecord]),
{
    fn on_change(&mut self, event: &ChangeEvent, snapshot: &[ExpenseRecord]) {
        self(event, snapshot)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn StoreObserver>)>,
}

impl ObserverRegistry {
    pub(crate) fn add(&mut self, observer: Box<dyn StoreObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, event: &ChangeEvent, snapshot: &[ExpenseRecord]) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_change(event, snapshot);
        }
    }
}
