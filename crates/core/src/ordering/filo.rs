use super::OrderingStrategy;
use crate::ticket::Ticket;

/// Strategy that processes the most recently submitted ticket first.
pub struct FiloStrategy;

impl FiloStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FiloStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderingStrategy for FiloStrategy {
    fn name(&self) -> &'static str {
        "filo"
    }

    fn reorder(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let mut ordered = tickets.to_vec();
        ordered.reverse();
        ordered
    }
}
