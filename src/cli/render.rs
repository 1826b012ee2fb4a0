//! Row rendering for the expense list.

use colored::{Color, Colorize};

use crate::{
    expense::{Amounted, ExpenseRecord, NamedEntity},
    presentation::{classify_amount, AmountTier},
};

/// Terminal color for an amount band; `None` keeps the default foreground.
pub fn tier_color(tier: AmountTier) -> Option<Color> {
    match tier {
        AmountTier::Low => Some(Color::Red),
        AmountTier::Mid => Some(Color::Green),
        AmountTier::High => Some(Color::Blue),
        AmountTier::Neutral => None,
    }
}

/// Formats one list row. `position` is zero-based and shown one-based.
pub fn format_row(position: usize, record: &ExpenseRecord, symbol: &str, color: bool) -> String {
    let amount = format!("{}{}", symbol, record.amount());
    let amount = match tier_color(classify_amount(record.amount())) {
        Some(tint) if color => amount.color(tint).to_string(),
        _ => amount,
    };
    format!(
        "#{:<3} {} ({})  {}",
        position + 1,
        record.name(),
        record.category(),
        amount
    )
}

pub fn render_rows(records: &[ExpenseRecord], symbol: &str, color: bool) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| format_row(position, record, symbol, color))
        .collect()
}
