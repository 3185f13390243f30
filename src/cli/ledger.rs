//! One-shot ledger commands
//!
//! Each invocation runs against a fresh session, so the undo stack and the
//! today queue only matter inside the `shell` command.

use chrono::NaiveDate;
use clap::Subcommand;

use super::row_to_index;
use crate::display::{format_record_details, format_register, format_summary};
use crate::error::{DompetError, DompetResult};
use crate::models::RecordForm;
use crate::services::LedgerSession;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Add a new income or expense entry
    Add {
        /// Pemasukan/Pengeluaran (or income/expense)
        #[arg(short, long)]
        kind: String,
        /// Category, e.g. "Gaji"
        #[arg(short, long)]
        category: String,
        /// Whole amount in the smallest currency unit
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all entries
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an entry; omitted fields keep their current value
    Edit {
        /// Row number as shown by `list`
        row: usize,
        #[arg(short, long)]
        kind: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Row number as shown by `list`
        row: usize,
    },

    /// Show total income, total expense and balance
    Report {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(session: &mut LedgerSession, cmd: LedgerCommands) -> DompetResult<()> {
    match cmd {
        LedgerCommands::Add {
            kind,
            category,
            amount,
            description,
            date,
        } => {
            let form = RecordForm::new(kind, category, amount, description);
            let records = match date {
                Some(date) => session.add_dated(parse_date(&date)?, &form)?,
                None => session.add(&form)?,
            };

            let index = records.len() - 1;
            println!("Transaction added.");
            print!("{}", format_record_details(index, &records[index]));
        }

        LedgerCommands::List { json } => {
            let records = session.records()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", format_register(&records));
            }
        }

        LedgerCommands::Edit {
            row,
            kind,
            category,
            amount,
            description,
        } => {
            let index = row_to_index(row)?;

            if kind.is_none() && category.is_none() && amount.is_none() && description.is_none() {
                println!("No changes specified. Use --kind, --category, --amount, or --description.");
                return Ok(());
            }

            let current = session.begin_edit(index)?;
            let mut form = RecordForm::from(&current);
            if let Some(kind) = kind {
                form.kind = kind;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(description) = description {
                form.description = description;
            }

            let records = session.commit_edit(&form)?;
            println!("Changes saved.");
            print!("{}", format_record_details(index, &records[index]));
        }

        LedgerCommands::Delete { row } => {
            let index = row_to_index(row)?;
            let removed = session.delete(index)?;
            println!(
                "Deleted row {}: {} - {} - {}",
                row,
                removed.kind,
                removed.category,
                removed.amount.format_with_symbol(session.currency_symbol())
            );
        }

        LedgerCommands::Report { json } => {
            let summary = session.summary()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_summary(&summary, session.currency_symbol()));
            }
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> DompetResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DompetError::Validation(format!("invalid date '{}': {}", s, e)))
}
