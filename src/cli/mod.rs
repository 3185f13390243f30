//! CLI command handlers
//!
//! This module bridges clap argument parsing and the interactive shell with
//! the ledger session.

pub mod ledger;
pub mod shell;

pub use ledger::{handle_ledger_command, LedgerCommands};
pub use shell::{run_shell, ShellMode};

use crate::error::{DompetError, DompetResult};

/// Convert a 1-based row number as shown on screen into a ledger index
pub fn row_to_index(row: usize) -> DompetResult<usize> {
    row.checked_sub(1)
        .ok_or_else(|| DompetError::Validation("rows are numbered from 1".into()))
}
