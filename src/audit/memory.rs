//! In-memory audit sink
//!
//! Keeps messages in insertion order. Useful for embedding the service
//! without a file system and for inspecting what an operation logged.

use std::sync::Mutex;

use super::logger::Logger;

#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message logged so far
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());

        logger.log("first");
        logger.log("second");

        assert_eq!(logger.messages(), vec!["first", "second"]);
        assert_eq!(logger.len(), 2);
        assert!(!logger.is_empty());
    }
}
