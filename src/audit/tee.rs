//! Fan-out audit sink

use super::logger::Logger;

/// Forwards every message to two sinks, primary first
#[derive(Debug, Default, Clone)]
pub struct TeeLogger<A, B> {
    primary: A,
    secondary: B,
}

impl<A: Logger, B: Logger> TeeLogger<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Logger, B: Logger> Logger for TeeLogger<A, B> {
    fn log(&self, message: &str) {
        self.primary.log(message);
        self.secondary.log(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryLogger;

    #[test]
    fn test_both_sinks_receive_message() {
        let tee = TeeLogger::new(MemoryLogger::new(), MemoryLogger::new());
        tee.log("Deposited 200.00 into account 12345");

        assert_eq!(tee.primary.messages(), vec!["Deposited 200.00 into account 12345"]);
        assert_eq!(tee.secondary.len(), 1);
    }
}
