use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dompet::cli::{handle_ledger_command, run_shell, LedgerCommands, ShellMode};
use dompet::config::{DompetPaths, Settings};
use dompet::services::LedgerSession;
use dompet::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "dompet",
    version,
    about = "Personal income/expense ledger",
    long_about = "Dompet records income and expense entries in a CSV ledger. \
                  Use the one-shot commands for scripting, or `dompet shell` \
                  for a session with undo and a list of today's entries."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "DOMPET_FILE")]
    file: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Create the data directory, settings file and an empty ledger
    Init,

    /// Start an interactive session with undo and today's entries
    Shell,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    dompet::logging::init_tracing(cli.verbose);

    let paths = DompetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.ledger_path(&paths));

    let store = LedgerStore::new(ledger_path);
    let mut session = LedgerSession::new(store, settings.currency_symbol.clone());

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&mut session, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Dompet at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;

            let store = session.store();
            if store.path().exists() {
                println!("Keeping existing ledger: {}", store.path().display());
            } else {
                store.save(&[])?;
                println!("Created ledger: {}", store.path().display());
            }
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Shell) => {
            run_shell(&mut session, settings.default_kind, ShellMode::from_env())?;
        }
        Some(Commands::Config) => {
            println!("Dompet Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", session.store().path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default kind:    {}", settings.default_kind);
        }
        None => {
            println!("Dompet - personal income/expense ledger");
            println!();
            println!("Run 'dompet --help' for usage information.");
            println!("Run 'dompet shell' to start an interactive session.");
        }
    }

    Ok(())
}
