//! Core data models for the ledger
//!
//! This module contains the data structures that represent the banking
//! domain: accounts, their identifiers and monetary amounts.

pub mod account;
pub mod ids;
pub mod money;

pub use account::{Account, AccountType};
pub use ids::AccountId;
pub use money::{Money, MoneyParseError};
