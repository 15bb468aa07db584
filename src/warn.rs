//! Warning sinks for non-fatal diagnostics
//!
//! Malformed dates and unavailable sources degrade gracefully; the only
//! trace they leave is a warning. Warnings go through a sink so the CLI can
//! route them to stderr while tests capture and assert on them.

use std::sync::Mutex;

/// Receives advisory warnings emitted during parsing and resolution.
pub trait WarningSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Prints warnings to stderr, prefixed like CLI errors.
#[derive(Debug, Default)]
pub struct StderrSink;

impl WarningSink for StderrSink {
    fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}

/// Collects warnings in memory. Used by tests to assert on diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings seen so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("warning sink poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("warning sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarningSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("warning sink poisoned")
            .push(message.to_string());
    }
}
