//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Business-rule rejections (insufficient funds, a failed withdraw predicate)
//! are not errors: the operations report them as `Ok(false)`.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A deposit or transfer amount that is zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// A balance or interest computation left the representable range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for account numbers
    pub fn duplicate_account(account_number: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Account",
            identifier: account_number.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is an arithmetic overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = LedgerError::InvalidAmount(Money::from_units(-100));
        assert_eq!(err.to_string(), "Invalid amount: -100.00");
        assert!(err.is_invalid_amount());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_overflow_error() {
        let err = LedgerError::Overflow("deposit of 1.00 into account 12345".into());
        assert_eq!(
            err.to_string(),
            "Arithmetic overflow: deposit of 1.00 into account 12345"
        );
        assert!(err.is_overflow());
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::account_not_found("12345");
        assert_eq!(err.to_string(), "Account not found: 12345");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_error() {
        let err = LedgerError::duplicate_account("12345");
        assert_eq!(err.to_string(), "Account already exists: 12345");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
