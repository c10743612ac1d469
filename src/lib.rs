//! bank-ledger - Minimal banking ledger
//!
//! This library provides accounts with deposit and withdrawal, composable
//! validation predicates, an account service that records every operation
//! through an audit logger, and JSON file persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, money, identifiers)
//! - `validation`: Balance predicates and validator factories
//! - `storage`: Repository trait, shared in-memory store and JSON file storage
//! - `services`: Business logic layer
//! - `audit`: Audit logging sinks
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use bank_ledger::audit::MemoryLogger;
//! use bank_ledger::models::{AccountType, Money};
//! use bank_ledger::services::AccountService;
//! use bank_ledger::storage::InMemoryAccountRepository;
//!
//! let repository = InMemoryAccountRepository::new();
//! let logger = MemoryLogger::new();
//! let service = AccountService::new(&repository, &logger);
//! let mut account =
//!     service.open_account("12345", Money::from_units(1000), AccountType::Checking)?;
//! service.deposit(&mut account, Money::from_units(200), |_| {})?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{LedgerError, LedgerResult};
