//! In-memory backend used by tests and throwaway sessions.

use std::collections::HashMap;

use crate::errors::StorageError;

use super::{KeyValueBackend, Result};

/// Key-value storage held entirely in memory.
///
/// Writes can be switched off with [`MemoryStorage::reject_writes`] to simulate a
/// backend that refuses to persist. [`MemoryStorage::fail_reads`] makes every read
/// return an error.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, Vec<u8>>,
    reject_writes: bool,
    fail_reads: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a backend pre-populated with `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Number of successful writes since construction.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl KeyValueBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.fail_reads {
            return Err(StorageError::Rejected(format!(
                "reads of `{}` are disabled",
                key
            )));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        if self.reject_writes {
            return Err(StorageError::Rejected(format!(
                "writes to `{}` are disabled",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_vec());
        self.writes += 1;
        Ok(())
    }
}
