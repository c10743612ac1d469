//! Audit logging for the ledger
//!
//! Every service operation reports its outcome, accepted or rejected, to a
//! `Logger`. The logger never influences control flow.
//!
//! # Sinks
//!
//! - `AuditLogger`: append-only JSONL file, one `AuditEntry` per line.
//! - `ConsoleLogger`: prints `[LOG] <time>: <message>` to stdout.
//! - `MemoryLogger`: keeps messages in memory.
//! - `TeeLogger`: forwards to two sinks.
//!
//! # Example
//!
//! ```rust,ignore
//! use bank_ledger::audit::{AuditLogger, Logger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log("Opened account 12345 (Checking) with balance 1000.00");
//! let recent = logger.read_recent(10)?;
//! ```

mod console;
mod entry;
mod logger;
mod memory;
mod tee;

pub use console::ConsoleLogger;
pub use entry::AuditEntry;
pub use logger::{AuditLogger, Logger};
pub use memory::MemoryLogger;
pub use tee::TeeLogger;
