//! User settings for the ledger
//!
//! Holds the defaults the CLI applies when the caller does not pass them
//! explicitly: interest rate, the minimum balance a withdrawal must leave
//! behind, and whether audit messages are echoed to the console.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Money;

/// User settings for the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Interest rate in percent used when none is given
    #[serde(default = "default_interest_rate")]
    pub default_interest_rate: Decimal,

    /// Balance a withdrawal or outgoing transfer must leave on the account
    #[serde(default)]
    pub minimum_balance: Money,

    /// Echo audit messages to stdout in addition to the audit log
    #[serde(default)]
    pub audit_to_console: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_interest_rate() -> Decimal {
    Decimal::ONE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_interest_rate: default_interest_rate(),
            minimum_balance: Money::zero(),
            audit_to_console: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller asks for it
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
