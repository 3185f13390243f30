//! Dompet - personal income/expense ledger
//!
//! Records income and expense entries in a flat CSV file and supports
//! row-selection editing, deletion with undo, and a list of the entries added
//! during the current session.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, kinds, amounts, and summaries
//! - `storage`: CSV-backed ledger store with atomic rewrites
//! - `session`: Undo stack, today queue, and selection state machine
//! - `services`: The ledger session tying store and session state together
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use dompet::models::RecordForm;
//! use dompet::services::LedgerSession;
//! use dompet::storage::LedgerStore;
//!
//! let store = LedgerStore::new("transaksi.csv");
//! let mut session = LedgerSession::new(store, "Rp");
//! session.add(&RecordForm::new("Pengeluaran", "Food", "200000", "lunch"))?;
//! println!("{:?}", session.summary()?);
//! # Ok::<(), dompet::DompetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{DompetError, DompetResult};
