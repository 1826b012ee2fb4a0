//! Expense domain models and the shared traits they implement.

pub mod category;
pub mod common;
pub mod record;

pub use category::{ExpenseCategory, DEFAULT_CATEGORY};
pub use common::{Amounted, Identifiable, NamedEntity};
pub use record::ExpenseRecord;
