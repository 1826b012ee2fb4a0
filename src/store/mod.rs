//! The observable expense store.
//!
//! [`ExpenseStore`] owns the ordered expense collection. Every committed mutation
//! follows the same sequence: change the collection, write the whole collection to
//! the backend under [`ITEMS_KEY`], then notify observers. Backend failures never
//! undo the in-memory change; they are logged and reported through
//! [`ChangeEvent::persisted`].

pub mod codec;
pub mod events;

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::{
    errors::{ExpenseError, Result},
    expense::{ExpenseRecord, Identifiable},
    storage::{KeyValueBackend, ITEMS_KEY},
};

pub use events::{ChangeEvent, ChangeKind, ObserverId, StoreObserver};
use events::ObserverRegistry;

/// Single source of truth for the expense list.
pub struct ExpenseStore<B: KeyValueBackend> {
    backend: B,
    items: Vec<ExpenseRecord>,
    observers: ObserverRegistry,
    revision: u64,
    durable: bool,
}

impl<B: KeyValueBackend> ExpenseStore<B> {
    /// Loads the persisted collection from `backend`.
    ///
    /// An absent key, a failed read, or an undecodable blob all yield an empty store.
    pub fn initialize(backend: B) -> Self {
        let items = match backend.get(ITEMS_KEY) {
            Ok(Some(bytes)) => match codec::decode(&bytes) {
                Ok(items) => {
                    info!(count = items.len(), "restored expenses");
                    items
                }
                Err(err) => {
                    warn!(error = %err, "discarding undecodable expense data");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no stored expenses found");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to read stored expenses");
                Vec::new()
            }
        };

        Self {
            backend,
            items,
            observers: ObserverRegistry::default(),
            revision: 0,
            durable: true,
        }
    }

    /// Appends `record`, persists the collection, and notifies observers.
    pub fn add(&mut self, record: ExpenseRecord) {
        let index = self.items.len();
        let id = record.id();
        self.items.push(record);
        debug!(%id, index, "expense added");
        self.commit(ChangeKind::Added { index, id });
    }

    /// Removes every record whose position appears in `indices` as one update.
    ///
    /// Positions refer to the ordering before removal. Any out-of-range position
    /// fails the whole call and leaves the collection untouched. Returns the removed
    /// records in their original order; an empty index set changes nothing.
    pub fn remove_at<I>(&mut self, indices: I) -> Result<Vec<ExpenseRecord>>
    where
        I: IntoIterator<Item = usize>,
    {
        let targets: BTreeSet<usize> = indices.into_iter().collect();
        let len = self.items.len();
        if let Some(&index) = targets.iter().find(|&&index| index >= len) {
            return Err(ExpenseError::IndexOutOfRange { index, len });
        }
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let mut kept = Vec::with_capacity(len - targets.len());
        let mut removed = Vec::with_capacity(targets.len());
        for (position, record) in self.items.drain(..).enumerate() {
            if targets.contains(&position) {
                removed.push(record);
            } else {
                kept.push(record);
            }
        }
        self.items = kept;

        let ids = removed.iter().map(Identifiable::id).collect();
        debug!(count = removed.len(), "expenses removed");
        self.commit(ChangeKind::Removed {
            indices: targets.into_iter().collect(),
            ids,
        });
        Ok(removed)
    }

    /// Current ordered collection.
    pub fn snapshot(&self) -> &[ExpenseRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of committed mutations since initialization.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the latest mutation reached the backend.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) -> ObserverId {
        self.observers.add(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store, handing back its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn commit(&mut self, kind: ChangeKind) {
        self.revision += 1;
        self.durable = match self.persist() {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, revision = self.revision, "expense changes were not persisted");
                false
            }
        };
        let event = ChangeEvent {
            revision: self.revision,
            kind,
            persisted: self.durable,
        };
        self.observers.notify(&event, &self.items);
    }

    fn persist(&mut self) -> Result<()> {
        let bytes = codec::encode(&self.items)?;
        self.backend.set(ITEMS_KEY, &bytes)?;
        Ok(())
    }
}
