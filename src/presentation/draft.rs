use crate::{
    errors::{ExpenseError, Result},
    expense::ExpenseRecord,
};

/// Parses the free-text amount field of the add form.
///
/// Surrounding whitespace is ignored; anything else that is not a non-negative
/// integer fails with [`ExpenseError::InvalidAmount`] carrying the original text.
pub fn parse_amount(input: &str) -> Result<u64> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| ExpenseError::InvalidAmount(input.to_string()))
}

/// Raw add-form input, before the amount has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Builds a record, or returns the amount parse failure without building one.
    pub fn into_record(self) -> Result<ExpenseRecord> {
        let amount = parse_amount(&self.amount)?;
        Ok(ExpenseRecord::new(self.name, self.category, amount))
    }
}
