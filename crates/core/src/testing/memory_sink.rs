//! In-memory output sink for test assertions.

use crate::sink::OutputSink;

/// Sink that records every written line for later assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Ticket identifiers announced in processing blocks, in emission order.
    pub fn processed_ids(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| line.strip_prefix("Processing ticket id: "))
            .map(str::to_string)
            .collect()
    }

    /// Customers announced in processing blocks, in emission order.
    pub fn processed_customers(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| line.strip_prefix("Customer: "))
            .map(str::to_string)
            .collect()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
