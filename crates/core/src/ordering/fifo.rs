use super::OrderingStrategy;
use crate::ticket::Ticket;

/// Strategy that processes tickets in submission order.
pub struct FifoStrategy;

impl FifoStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FifoStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderingStrategy for FifoStrategy {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn reorder(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        tickets.to_vec()
    }
}
