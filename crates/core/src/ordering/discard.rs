use super::OrderingStrategy;
use crate::ticket::Ticket;

/// Strategy that drops every queued ticket.
///
/// Processing with this policy always takes the empty-queue branch; the
/// stored tickets themselves are untouched.
pub struct DiscardStrategy;

impl DiscardStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DiscardStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderingStrategy for DiscardStrategy {
    fn name(&self) -> &'static str {
        "discard"
    }

    fn reorder(&self, _tickets: &[Ticket]) -> Vec<Ticket> {
        Vec::new()
    }
}
