use std::fmt;

/// Color band derived from an expense amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTier {
    Low,
    Mid,
    High,
    /// Only reached by an amount of exactly 100, which none of the bands cover.
    Neutral,
}

/// Classifies `amount` into its display band, checking the bands in order.
pub fn classify_amount(amount: u64) -> AmountTier {
    if amount < 10 {
        AmountTier::Low
    } else if amount < 100 {
        AmountTier::Mid
    } else if amount > 100 {
        AmountTier::High
    } else {
        AmountTier::Neutral
    }
}

impl fmt::Display for AmountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AmountTier::Low => "low",
            AmountTier::Mid => "mid",
            AmountTier::High => "high",
            AmountTier::Neutral => "neutral",
        };
        f.write_str(label)
    }
}
