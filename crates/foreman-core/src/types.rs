use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Money
// =============================================================================

/// A currency amount in whole dollars.
///
/// Displays in the compact dashboard form: `$2.4M`, `$600K`, `$950`.
/// Fractions keep at most two digits, truncated, with trailing zeros dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    /// Difference between two amounts, saturating at the `i64` bounds.
    pub fn minus(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if abs >= 1_000_000 {
            write!(f, "{}${}", sign, scaled(abs, 1_000_000, "M"))
        } else if abs >= 1_000 {
            write!(f, "{}${}", sign, scaled(abs, 1_000, "K"))
        } else {
            write!(f, "{}${}", sign, abs)
        }
    }
}

fn scaled(abs: u64, unit: u64, suffix: &str) -> String {
    let whole = abs / unit;
    let hundredths = (abs % unit) * 100 / unit;
    if hundredths == 0 {
        format!("{}{}", whole, suffix)
    } else if hundredths % 10 == 0 {
        format!("{}.{}{}", whole, hundredths / 10, suffix)
    } else {
        format!("{}.{:02}{}", whole, hundredths, suffix)
    }
}

// =============================================================================
// SignedPercent
// =============================================================================

/// A whole-number percentage that always shows its direction.
///
/// `-5` displays as `-5%`, `3` as `+3%`, zero as `0%`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedPercent(pub i32);

impl fmt::Display for SignedPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}%", self.0)
        } else {
            write!(f, "{}%", self.0)
        }
    }
}
