use thiserror::Error;

/// Failures raised by the expense store and the input helpers that feed it.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Index {index} is out of range for {len} expenses")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Persistence error: {0}")]
    PersistWrite(#[from] StorageError),
    #[error("You cannot convert {0} into a number!")]
    InvalidAmount(String),
}

/// Errors reported by key-value persistence backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Errors raised while loading or saving user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
