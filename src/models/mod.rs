//! Core data models for Dompet
//!
//! The ledger domain is small: a record, its typed field values, and the
//! totals computed over a ledger.

pub mod amount;
pub mod kind;
pub mod record;
pub mod summary;

pub use amount::Amount;
pub use kind::Kind;
pub use record::{Record, RecordFields, RecordForm};
pub use summary::Summary;
