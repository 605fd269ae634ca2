//! Operator-facing output sink.

/// Trait for the sink that receives operator-facing output lines.
///
/// Lines are fire-and-forget: there is no acknowledgement and no failure
/// surface.
pub trait OutputSink: Send {
    /// Write one line of output.
    fn write_line(&mut self, line: &str);
}

/// Sink that writes to standard output.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
