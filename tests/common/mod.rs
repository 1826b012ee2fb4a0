#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use expense_core::{
    storage::{JsonStorage, MemoryStorage, ITEMS_KEY},
    ExpenseRecord, ExpenseStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Creates file-backed storage in an isolated directory.
pub fn json_storage() -> JsonStorage {
    JsonStorage::new(temp_home().join("storage")).expect("create json storage backend")
}

/// Memory backend seeded with `blob` under the items key.
pub fn memory_with_blob(blob: &str) -> MemoryStorage {
    MemoryStorage::with_entry(ITEMS_KEY, blob)
}

pub fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Groceries", "Personal", 64),
        ExpenseRecord::new("Client dinner", "Business", 180),
        ExpenseRecord::new("Parking", "Business", 8),
        ExpenseRecord::new("Concert", "Personal", 100),
    ]
}

pub fn seeded_store<B: expense_core::storage::KeyValueBackend>(backend: B) -> ExpenseStore<B> {
    let mut store = ExpenseStore::initialize(backend);
    for record in sample_records() {
        store.add(record);
    }
    store
}
