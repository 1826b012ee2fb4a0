#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps a small personal expense list in an observable store that
//! persists itself to key-value storage on every change.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expense;
pub mod presentation;
pub mod storage;
pub mod store;
pub mod utils;

pub use errors::ExpenseError;
pub use expense::ExpenseRecord;
pub use store::{ChangeEvent, ChangeKind, ExpenseStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Core tracing initialized.");
    });
}
