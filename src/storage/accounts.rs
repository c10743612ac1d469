//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json. Every mutation is
//! written through to disk before it returns.

use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};
use super::store::AccountStore;
use super::AccountRepository;

/// Serializable account data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct JsonAccountRepository {
    path: PathBuf,
    store: AccountStore,
}

impl JsonAccountRepository {
    /// Create a new account repository; call `load` before use
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            store: AccountStore::new(),
        }
    }

    /// Create a repository and load whatever is already on disk
    pub fn open(path: PathBuf) -> LedgerResult<Self> {
        let repo = Self::new(path);
        repo.load()?;
        Ok(repo)
    }

    /// Load accounts from disk
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: AccountData = read_json(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            accounts = file_data.accounts.len(),
            "loaded accounts"
        );
        self.store.replace_all(file_data.accounts)
    }

    /// Save accounts to disk
    pub fn save(&self) -> LedgerResult<()> {
        let file_data = AccountData {
            accounts: self.store.get_all()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountRepository for JsonAccountRepository {
    fn add(&self, account: &Account) -> LedgerResult<()> {
        self.store.upsert(account.clone())?;
        self.save()
    }

    fn update(&self, account: &Account) -> LedgerResult<()> {
        self.store.upsert(account.clone())?;
        self.save()
    }

    fn remove(&self, account: &Account) -> LedgerResult<()> {
        if self.store.delete(account.id())? {
            self.save()?;
        }
        Ok(())
    }

    fn get_by_id(&self, id: AccountId) -> LedgerResult<Option<Account>> {
        self.store.get(id)
    }

    fn get_by_account_number(&self, account_number: &str) -> LedgerResult<Option<Account>> {
        self.store.get_by_account_number(account_number)
    }

    fn get_all(&self) -> LedgerResult<Vec<Account>> {
        self.store.get_all()
    }
}
