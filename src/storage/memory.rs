//! In-memory account repository

use std::sync::Arc;

use crate::error::LedgerResult;
use crate::models::{Account, AccountId};

use super::store::AccountStore;
use super::AccountRepository;

/// Repository over an `AccountStore` that lives only as long as its owners
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    store: Arc<AccountStore>,
}

impl InMemoryAccountRepository {
    /// Create a repository with a fresh, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository over an existing store
    pub fn with_store(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn add(&self, account: &Account) -> LedgerResult<()> {
        self.store.upsert(account.clone())
    }

    fn update(&self, account: &Account) -> LedgerResult<()> {
        self.store.upsert(account.clone())
    }

    fn remove(&self, account: &Account) -> LedgerResult<()> {
        self.store.delete(account.id())?;
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
