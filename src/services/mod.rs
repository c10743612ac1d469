//! Service layer for the ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! sequencing validation, mutation, persistence and audit logging.

pub mod account;

pub use account::{simple_interest, AccountService};
