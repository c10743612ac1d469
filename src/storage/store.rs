//! Account store
//!
//! The map of accounts shared by the repository implementations. It is an
//! ordinary value: whoever builds a repository decides which store it sees.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId};

/// Accounts keyed by identifier
#[derive(Debug, Default)]
pub struct AccountStore {
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, HashMap<AccountId, Account>>> {
        self.data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, HashMap<AccountId, Account>>> {
        self.data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Insert or replace the account stored under its id
    pub fn upsert(&self, account: Account) -> LedgerResult<()> {
        self.write()?.insert(account.id(), account);
        Ok(())
    }

    /// Remove an account, returning whether it was present
    pub fn delete(&self, id: AccountId) -> LedgerResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    pub fn get(&self, id: AccountId) -> LedgerResult<Option<Account>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Exact match on the account number
    pub fn get_by_account_number(&self, account_number: &str) -> LedgerResult<Option<Account>> {
        Ok(self
            .read()?
            .values()
            .find(|a| a.account_number() == account_number)
            .cloned())
    }

    /// All accounts ordered by account number
    pub fn get_all(&self) -> LedgerResult<Vec<Account>> {
        let mut accounts: Vec<_> = self.read()?.values().cloned().collect();
        accounts.sort_by(|a, b| {
            a.account_number()
                .cmp(b.account_number())
                .then(a.id().cmp(&b.id()))
        });
        Ok(accounts)
    }

    /// Replace the whole contents, e.g. after reading a snapshot from disk
    pub fn replace_all(&self, accounts: Vec<Account>) -> LedgerResult<()> {
        let mut data = self.write()?;
        data.clear();
        for account in accounts {
            data.insert(account.id(), account);
        }
        Ok(())
    }
}
