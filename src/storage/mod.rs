//! Storage layer for the ledger
//!
//! The service talks to persistence only through `AccountRepository`.
//! Two implementations are provided: an in-memory one over an explicit
//! `AccountStore`, and a JSON file one with atomic writes.

pub mod accounts;
pub mod file_io;
pub mod memory;
pub mod store;

pub use accounts::JsonAccountRepository;
pub use file_io::{read_json, write_json_atomic};
pub use memory::InMemoryAccountRepository;
pub use store::AccountStore;

use crate::error::LedgerResult;
use crate::models::{Account, AccountId};

/// Persistence contract for accounts
///
/// Lookups return `Ok(None)` for unknown keys. Errors are reserved for
/// storage faults.
pub trait AccountRepository: Send + Sync {
    fn add(&self, account: &Account) -> LedgerResult<()>;

    /// Replace the stored copy of `account`, matched by id
    fn update(&self, account: &Account) -> LedgerResult<()>;

    /// Remove `account` if present
    fn remove(&self, account: &Account) -> LedgerResult<()>;

    fn get_by_id(&self, id: AccountId) -> LedgerResult<Option<Account>>;

    fn get_by_account_number(&self, account_number: &str) -> LedgerResult<Option<Account>>;

    fn get_all(&self) -> LedgerResult<Vec<Account>>;
}
