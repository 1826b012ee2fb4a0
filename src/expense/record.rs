//! The expense line item persisted by the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Amounted, Identifiable, NamedEntity};

/// One user-entered expense.
///
/// Fields are private so the identifier, assigned once in [`ExpenseRecord::new`],
/// cannot change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseRecord {
    id: Uuid,
    name: String,
    #[serde(rename = "type")]
    category: String,
    amount: u64,
}

impl ExpenseRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>, amount: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            amount,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ExpenseRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> u64 {
        self.amount
    }
}
