//! Interactive ledger shell
//!
//! Keeps one [`LedgerSession`] alive across commands so the undo stack, the
//! today queue, and the row selection work as they do in a windowed app.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shell_words::split;
use thiserror::Error;

use super::row_to_index;
use crate::display::{format_record_details, format_register, format_summary};
use crate::error::{DompetError, DompetResult};
use crate::models::{Kind, RecordForm};
use crate::services::LedgerSession;
use crate::session::SelectionState;

/// Where shell commands come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    /// Line editor with history
    Interactive,
    /// Plain lines from stdin, no prompt
    Script,
}

impl ShellMode {
    /// Script mode when `DOMPET_SCRIPT` is set, interactive otherwise
    pub fn from_env() -> Self {
        if std::env::var_os("DOMPET_SCRIPT").is_some() {
            Self::Script
        } else {
            Self::Interactive
        }
    }
}

#[derive(Debug, Error)]
enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error(transparent)]
    Ledger(#[from] DompetError),
}

#[derive(Debug, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

const HELP: &str = "\
Commands:
  add <kind> <category> <amount> [description...]   add an entry dated today
  add <category> <amount>                           same, using the default kind
  list                                              show all entries
  select <row>                                      load a row for editing
  commit <kind> <category> <amount> [description...] save changes to the selected row
  cancel                                            drop the selection
  delete <row>                                      delete a row (undoable)
  undo                                              restore the last deleted row
  report                                            income, expense and balance
  today                                             entries added this session
  help                                              show this help
  exit | quit                                       leave the shell
Kinds: Pemasukan / Pengeluaran (or income / expense). Rows start at 1.
";

/// Run the shell until `exit` or end of input
pub fn run_shell(session: &mut LedgerSession, default_kind: Kind, mode: ShellMode) -> DompetResult<()> {
    let mut shell = Shell {
        session,
        default_kind,
    };

    match mode {
        ShellMode::Interactive => shell.run_interactive(),
        ShellMode::Script => shell.run_script(),
    }
}

struct Shell<'a> {
    session: &'a mut LedgerSession,
    default_kind: Kind,
}

impl Shell<'_> {
    fn run_interactive(&mut self) -> DompetResult<()> {
        let mut editor = DefaultEditor::new().map_err(readline_error)?;
        println!("Dompet shell. Type 'help' for commands.");

        loop {
            match editor.readline(&self.prompt()) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(trimmed);

                    if self.handle_line(trimmed) == LoopControl::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(readline_error(err)),
            }
        }

        Ok(())
    }

    fn run_script(&mut self) -> DompetResult<()> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if self.handle_line(&line) == LoopControl::Exit {
                break;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        match self.session.selection() {
            SelectionState::Idle => "dompet> ".to_string(),
            SelectionState::Editing(index) => format!("dompet [editing #{}]> ", index + 1),
        }
    }

    fn handle_line(&mut self, line: &str) -> LoopControl {
        let tokens = match split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprintln!("Error: {}", err);
                return LoopControl::Continue;
            }
        };

        let Some((command, args)) = tokens.split_first() else {
            return LoopControl::Continue;
        };

        match self.dispatch(&command.to_lowercase(), args) {
            Ok(control) => control,
            Err(err) => {
                eprintln!("Error: {}", err);
                LoopControl::Continue
            }
        }
    }

    fn dispatch(&mut self, command: &str, args: &[String]) -> Result<LoopControl, CommandError> {
        match command {
            "add" => {
                let form = parse_add_form(args, self.default_kind)?;
                self.session.add(&form)?;
                println!("Transaction added.");
                self.print_today();
            }
            "list" | "ls" => {
                print!("{}", format_register(&self.session.records()?));
            }
            "select" => {
                let index = parse_row(args, "select <row>")?;
                let record = self.session.begin_edit(index)?;
                print!("{}", format_record_details(index, &record));
            }
            "commit" | "save" => {
                let form = parse_form(args, "commit <kind> <category> <amount> [description...]")?;
                self.session.commit_edit(&form)?;
                println!("Changes saved.");
            }
            "cancel" => {
                if !self.session.is_editing() {
                    println!("Nothing is selected.");
                } else {
                    self.session.cancel_edit();
                    println!("Selection cleared (form reset to {}).", self.default_kind);
                }
            }
            "delete" | "rm" => {
                let index = parse_row(args, "delete <row>")?;
                let removed = self.session.delete(index)?;
                println!(
                    "Deleted: {} - {}. Use 'undo' to restore it.",
                    removed.kind, removed.category
                );
            }
            "undo" => match self.session.undo_delete() {
                Ok(record) => println!(
                    "Restored: {} - {} (now the last row).",
                    record.kind, record.category
                ),
                Err(DompetError::EmptyUndo) => println!("Nothing to undo."),
                Err(err) => return Err(err.into()),
            },
            "report" => {
                let summary = self.session.summary()?;
                print!("{}", format_summary(&summary, self.session.currency_symbol()));
            }
            "today" => self.print_today(),
            "help" | "?" => print!("{}", HELP),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => return Err(CommandError::Unknown(other.to_string())),
        }

        Ok(LoopControl::Continue)
    }

    fn print_today(&self) {
        let lines = self.session.today();
        if lines.is_empty() {
            println!("No entries added today.");
            return;
        }

        println!("Today's entries:");
        for line in lines {
            println!("  {}", line);
        }
    }
}

/// `add` also takes just a category and amount, filling in `default_kind`
fn parse_add_form(args: &[String], default_kind: Kind) -> Result<RecordForm, CommandError> {
    match args {
        [category, amount] => {
            let mut form = RecordForm::blank(default_kind);
            form.category = category.clone();
            form.amount = amount.clone();
            Ok(form)
        }
        _ => parse_form(args, "add [kind] <category> <amount> [description...]"),
    }
}

fn parse_form(args: &[String], usage: &'static str) -> Result<RecordForm, CommandError> {
    match args {
        [kind, category, amount, description @ ..] => Ok(RecordForm::new(
            kind.as_str(),
            category.as_str(),
            amount.as_str(),
            description.join(" "),
        )),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn parse_row(args: &[String], usage: &'static str) -> Result<usize, CommandError> {
    let [row] = args else {
        return Err(CommandError::Usage(usage));
    };
    let row = row.parse::<usize>().map_err(|_| CommandError::Usage(usage))?;
    Ok(row_to_index(row)?)
}

fn readline_error(err: ReadlineError) -> DompetError {
    DompetError::Io(format!("Line editor failed: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_form_joins_description() {
        let form = parse_form(&args(&["Pengeluaran", "Food", "200000", "lunch", "out"]), "x").unwrap();
        assert_eq!(form, RecordForm::new("Pengeluaran", "Food", "200000", "lunch out"));
    }

    #[test]
    fn test_parse_form_requires_three_args() {
        assert!(matches!(
            parse_form(&args(&["Pemasukan", "Salary"]), "x"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_short_add_uses_default_kind() {
        let form = parse_add_form(&args(&["Fuel", "30"]), Kind::Expense).unwrap();
        assert_eq!(form, RecordForm::new("Pengeluaran", "Fuel", "30", ""));

        let form = parse_add_form(&args(&["income", "Gift", "5", "from", "mum"]), Kind::Expense).unwrap();
        assert_eq!(form, RecordForm::new("income", "Gift", "5", "from mum"));

        assert!(matches!(
            parse_add_form(&args(&["Fuel"]), Kind::Expense),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(parse_row(&args(&["2"]), "x").unwrap(), 1);
        assert!(matches!(parse_row(&args(&["two"]), "x"), Err(CommandError::Usage(_))));
        assert!(matches!(parse_row(&args(&["0"]), "x"), Err(CommandError::Ledger(_))));
        assert!(matches!(parse_row(&args(&[]), "x"), Err(CommandError::Usage(_))));
    }
}
