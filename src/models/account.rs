//! Account model
//!
//! An account owns its balance. The balance only moves through `deposit`
//! and `withdraw`; persistence and audit logging are left to the service
//! layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Type of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" | "c" => Some(Self::Checking),
            "savings" | "s" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A ledger account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,

    account_number: String,

    balance: Money,

    #[serde(rename = "type")]
    account_type: AccountType,
}

impl Account {
    /// Open a new account with a freshly generated identifier
    ///
    /// The initial balance is taken as given, including zero or negative
    /// values.
    pub fn new(
        account_number: impl Into<String>,
        initial_balance: Money,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: AccountId::new(),
            account_number: account_number.into(),
            balance: initial_balance,
            account_type,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Credit the account
    ///
    /// Fails with `InvalidAmount` for zero or negative amounts and with
    /// `Overflow` when the new balance is not representable. Either way the
    /// balance is left untouched.
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<()> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::Overflow(format!(
                "deposit of {} into account {}",
                amount, self.account_number
            ))
        })?;
        Ok(())
    }

    /// Debit the account
    ///
    /// Returns `Ok(false)` without touching the balance when the amount
    /// exceeds it. Non-positive amounts are not rejected here; gate them
    /// with a predicate from `validation` if needed. A negative amount large
    /// enough to push the balance out of range fails with `Overflow`.
    pub fn withdraw(&mut self, amount: Money) -> LedgerResult<bool> {
        if amount > self.balance {
            return Ok(false);
        }

        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            LedgerError::Overflow(format!(
                "withdrawal of {} from account {}",
                amount, self.account_number
            ))
        })?;
        Ok(true)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.account_number, self.account_type)
    }
}
