//! Balance validation
//!
//! Predicates that decide whether a withdraw or transfer may proceed, and a
//! factory that closes them over a threshold.

pub mod predicates;
pub mod validator;

pub use predicates::{has_sufficient_balance, is_balance_above_minimum};
pub use validator::AccountValidator;
