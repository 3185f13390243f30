//! Entry kind (income or expense)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DompetError;

/// Whether a ledger entry adds to or subtracts from the balance
///
/// Serialized with the Indonesian labels used by existing ledger files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Kind {
    #[default]
    #[serde(rename = "Pemasukan")]
    Income,
    #[serde(rename = "Pengeluaran")]
    Expense,
}

impl Kind {
    /// The on-disk label for this kind
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Income => "Pemasukan",
            Self::Expense => "Pengeluaran",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Kind {
    type Err = DompetError;

    /// Accepts the exact file labels, or `income`/`expense` in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pemasukan" => Ok(Self::Income),
            "Pengeluaran" => Ok(Self::Expense),
            other if other.eq_ignore_ascii_case("income") => Ok(Self::Income),
            other if other.eq_ignore_ascii_case("expense") => Ok(Self::Expense),
            other => Err(DompetError::Validation(format!(
                "kind must be Pemasukan or Pengeluaran, got '{}'",
                other
            ))),
        }
    }
}
