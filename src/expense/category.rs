//! Built-in expense categories.

use std::fmt;

/// Category preselected by the add form.
pub const DEFAULT_CATEGORY: ExpenseCategory = ExpenseCategory::Personal;

/// Labels offered when no custom category list is configured.
///
/// Records store the label as free text, so values outside this set are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    Business,
    Personal,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 2] = [ExpenseCategory::Business, ExpenseCategory::Personal];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Business => "Business",
            ExpenseCategory::Personal => "Personal",
        }
    }

    /// Returns the default labels as owned strings, in display order.
    pub fn default_labels() -> Vec<String> {
        Self::ALL.iter().map(|kind| kind.label().to_string()).collect()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_are_business_then_personal() {
        assert_eq!(
            ExpenseCategory::default_labels(),
            vec!["Business".to_string(), "Personal".to_string()]
        );
        assert_eq!(DEFAULT_CATEGORY.to_string(), "Personal");
    }
}
