//! Account CLI commands
//!
//! Implements CLI commands for opening accounts and moving money.

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::audit::Logger;
use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountType, Money};
use crate::services::{simple_interest, AccountService};
use crate::storage::AccountRepository;
use crate::validation::AccountValidator;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Open {
        /// Account number
        number: String,
        /// Account type (checking, savings)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Initial balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// Deposit into an account
    Deposit {
        /// Account number
        account: String,
        /// Amount to deposit
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Withdraw from an account
    Withdraw {
        /// Account number
        account: String,
        /// Amount to withdraw
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Transfer between two accounts
    Transfer {
        /// Source account number
        from: String,
        /// Destination account number
        to: String,
        /// Amount to transfer
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show the stored balance of an account
    Balance {
        /// Account number
        account: String,
    },
    /// Calculate simple interest on the current balance
    Interest {
        /// Account number
        account: String,
        /// Rate in percent (defaults to the configured rate)
        #[arg(short, long)]
        rate: Option<String>,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account number
        account: String,
    },
    /// Close (remove) an account
    Close {
        /// Account number
        account: String,
    },
}

fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| LedgerError::Validation(e.to_string()))
}

fn parse_rate(input: &str) -> LedgerResult<Decimal> {
    input
        .trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::Validation(format!("Invalid interest rate: {}", input)))
}

fn find_account(service: &AccountService<'_>, number: &str) -> LedgerResult<Account> {
    service
        .find(number)?
        .ok_or_else(|| LedgerError::account_not_found(number))
}

/// Handle an account command
pub fn handle_account_command(
    repository: &dyn AccountRepository,
    logger: &dyn Logger,
    settings: &Settings,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    let service = AccountService::new(repository, logger);

    match cmd {
        AccountCommands::Open {
            number,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings",
                    account_type
                ))
            })?;
            let balance = parse_amount(&balance)?;

            let account = service.open_account(&number, balance, account_type)?;

            println!("Opened account: {}", account.account_number());
            println!("  Type: {}", account.account_type());
            println!("  Balance: {}", account.balance());
            println!("  ID: {}", account.id());
        }

        AccountCommands::Deposit { account, amount } => {
            let amount = parse_amount(&amount)?;
            let mut found = find_account(&service, &account)?;
            let number = found.account_number().to_string();

            service.deposit(&mut found, amount, |balance| {
                println!("Deposited {} into {}. New balance: {}", amount, number, balance);
            })?;
        }

        AccountCommands::Withdraw { account, amount } => {
            let amount = parse_amount(&amount)?;
            let mut found = find_account(&service, &account)?;
            let gate = AccountValidator::withdrawal(amount, settings.minimum_balance);

            if service.withdraw(&mut found, amount, gate)? {
                println!(
                    "Withdrew {} from {}. New balance: {}",
                    amount,
                    found.account_number(),
                    found.balance()
                );
            } else {
                println!(
                    "Withdrawal of {} from {} was declined. Balance: {}",
                    amount,
                    found.account_number(),
                    found.balance()
                );
            }
        }

        AccountCommands::Transfer { from, to, amount } => {
            let amount = parse_amount(&amount)?;
            let mut source = find_account(&service, &from)?;
            let mut destination = find_account(&service, &to)?;
            let can_withdraw = AccountValidator::withdrawal(amount, settings.minimum_balance);

            let transferred = service.transfer(
                &mut source,
                &mut destination,
                amount,
                can_withdraw,
                |_| true,
            )?;

            if transferred {
                println!(
                    "Transferred {} from {} to {}.",
                    amount,
                    source.account_number(),
                    destination.account_number()
                );
                println!("  {}: {}", source.account_number(), source.balance());
                println!("  {}: {}", destination.account_number(), destination.balance());
            } else {
                println!(
                    "Transfer of {} from {} to {} was declined.",
                    amount,
                    source.account_number(),
                    destination.account_number()
                );
            }
        }

        AccountCommands::Balance { account } => {
            let found = find_account(&service, &account)?;
            let balance = service.get_balance(&found)?;
            println!("{}: {}", found.account_number(), balance);
        }

        AccountCommands::Interest { account, rate } => {
            let rate = match rate {
                Some(rate) => parse_rate(&rate)?,
                None => settings.default_interest_rate,
            };
            let found = find_account(&service, &account)?;

            let interest = service.calculate_interest(&found, simple_interest, rate)?;
            println!(
                "Interest for {} at {}%: {}",
                found.account_number(),
                rate,
                interest
            );
        }

        AccountCommands::List => {
            print!("{}", format_account_list(&service.list()?));
        }

        AccountCommands::Show { account } => {
            let found = find_account(&service, &account)?;
            print!("{}", format_account_details(&found));
        }

        AccountCommands::Close { account } => {
            let found = find_account(&service, &account)?;
            service.close_account(&found)?;
            println!("Closed account: {}", found.account_number());
        }
    }

    Ok(())
}
