//! Amount type for ledger entries
//!
//! Amounts are whole numbers in the smallest currency unit and can never be
//! negative; the entry's [`Kind`](super::Kind) carries the direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DompetError;

/// A non-negative amount in the smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Get the raw number of units
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Parse an amount from user input or a ledger cell
    ///
    /// Only ASCII digits are accepted (surrounding whitespace is ignored):
    /// no sign, no separators, no decimal point.
    pub fn parse(s: &str) -> Result<Self, DompetError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(DompetError::Validation("amount is required".into()));
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DompetError::Validation(format!(
                "amount must be a whole non-negative number, got '{}'",
                s
            )));
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| DompetError::Validation(format!("amount '{}' is too large", s)))
    }

    /// Format with a currency prefix, e.g. `Rp5000`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.0)
    }
}

impl FromStr for Amount {
    type Err = DompetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
