pub mod json_backend;
pub mod memory;

use crate::errors::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key under which the expense collection is stored.
pub const ITEMS_KEY: &str = "Items";

/// Abstraction over key-value stores holding opaque byte blobs.
pub trait KeyValueBackend {
    /// Returns the blob stored under `key`, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
