//! Console audit sink

use chrono::Local;

use super::logger::Logger;

/// Prints each audit message to stdout as `[LOG] <local time>: <message>`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn format_line(message: &str) -> String {
        format!("[LOG] {}: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}", Self::format_line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = ConsoleLogger::format_line("Opened account 12345");
        assert!(line.starts_with("[LOG] "));
        assert!(line.ends_with(": Opened account 12345"));
    }
}
