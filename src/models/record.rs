//! Ledger record model
//!
//! A record has no identifier of its own. It is addressed by its position in
//! the ledger, and that position is only meaningful until the next mutation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::kind::Kind;
use crate::error::DompetResult;

/// One income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Date the entry was created; never changed by an edit
    pub date: NaiveDate,

    pub kind: Kind,

    /// Free-form category, e.g. "Gaji" or "Makan"
    pub category: String,

    pub amount: Amount,

    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record dated `date` from validated fields
    pub fn new(date: NaiveDate, fields: RecordFields) -> Self {
        Self {
            date,
            kind: fields.kind,
            category: fields.category,
            amount: fields.amount,
            description: fields.description,
        }
    }

    /// Create a record with all fields spelled out
    pub fn with_details(
        date: NaiveDate,
        kind: Kind,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Replace every editable field, keeping the original date
    pub fn apply(&mut self, fields: RecordFields) {
        self.kind = fields.kind;
        self.category = fields.category;
        self.amount = fields.amount;
        self.description = fields.description;
    }

    /// The editable fields of this record
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            kind: self.kind,
            category: self.category.clone(),
            amount: self.amount,
            description: self.description.clone(),
        }
    }
}

/// The editable part of a record, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub kind: Kind,
    pub category: String,
    pub amount: Amount,
    pub description: String,
}

impl RecordFields {
    pub fn new(
        kind: Kind,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }
}

/// Raw, unvalidated field values as typed into an entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordForm {
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl RecordForm {
    pub fn new(
        kind: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// An empty form with `kind` preselected
    pub fn blank(kind: Kind) -> Self {
        Self::new(kind.label(), "", "", "")
    }

    /// Check the form and convert it into typed fields
    ///
    /// Fails with a validation error if the kind is unknown or the amount is
    /// not a whole non-negative number. Category and description are taken
    /// as-is.
    pub fn validate(&self) -> DompetResult<RecordFields> {
        let kind = self.kind.parse::<Kind>()?;
        let amount = Amount::parse(&self.amount)?;

        Ok(RecordFields {
            kind,
            category: self.category.clone(),
            amount,
            description: self.description.clone(),
        })
    }
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::blank(Kind::default())
    }
}

impl From<&Record> for RecordForm {
    fn from(record: &Record) -> Self {
        Self::new(
            record.kind.label(),
            record.category.clone(),
            record.amount.to_string(),
            record.description.clone(),
        )
    }
}
