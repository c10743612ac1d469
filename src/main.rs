use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bank_ledger::audit::{AuditLogger, ConsoleLogger, Logger, TeeLogger};
use bank_ledger::cli::{handle_account_command, AccountCommands};
use bank_ledger::config::{paths::LedgerPaths, settings::Settings};
use bank_ledger::storage::JsonAccountRepository;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Minimal banking ledger",
    long_about = "Open checking and savings accounts, move money between them, \
                  and keep an audit trail of every operation."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand, alias = "acc")]
    Account(AccountCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Initialize the ledger directories and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;

    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Account(cmd)) => {
            let repository = JsonAccountRepository::open(paths.accounts_file())?;
            let logger: Box<dyn Logger> = if settings.audit_to_console {
                Box::new(TeeLogger::new(audit, ConsoleLogger::new()))
            } else {
                Box::new(audit)
            };
            handle_account_command(&repository, logger.as_ref(), &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let entries = audit.read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries found.");
                return Ok(());
            }

            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
            println!();
            println!("Showing {} of {} entries", entries.len(), audit.entry_count()?);
        }
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let repository = JsonAccountRepository::open(paths.accounts_file())?;
            repository.save()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'ledger account open <NUMBER>' to open your first account.");
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default interest rate: {}%", settings.default_interest_rate);
            println!("  Minimum balance:       {}", settings.minimum_balance);
            println!("  Audit to console:      {}", settings.audit_to_console);
        }
        None => {
            println!("ledger - Minimal banking ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
