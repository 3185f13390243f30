//! Storage layer for Dompet
//!
//! The ledger is a single CSV file rewritten atomically on every change.
//! Settings are stored as JSON next to it.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_csv, read_json, write_csv_atomic, write_json_atomic, CsvTable};
pub use ledger::{LedgerStore, HEADER, LEGACY_HEADER};
