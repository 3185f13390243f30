//! Income/expense totals for a ledger

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Totals by kind and the resulting balance
///
/// Totals are wider than a single [`Amount`](super::Amount) so that a ledger
/// of valid amounts can never overflow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: u128,
    pub total_expense: u128,
    /// `total_income - total_expense`; negative when spending exceeds income
    pub balance: i128,
}

impl Summary {
    /// Sum a sequence of records by kind
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut total_income: u128 = 0;
        let mut total_expense: u128 = 0;
        let mut balance: i128 = 0;

        for record in records {
            let units = record.amount.units();
            if record.kind.is_income() {
                total_income += u128::from(units);
                balance += i128::from(units);
            } else {
                total_expense += u128::from(units);
                balance -= i128::from(units);
            }
        }

        Self {
            total_income,
            total_expense,
            balance,
        }
    }
}
