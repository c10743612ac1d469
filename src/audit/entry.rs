//! Audit entry data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation was recorded (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened, as reported by the service
    pub message: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.message
        )
    }
}
