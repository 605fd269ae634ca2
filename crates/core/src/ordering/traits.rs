use crate::ticket::Ticket;

/// Trait for ticket ordering policies.
///
/// An implementation selects the sequence in which queued tickets are
/// processed. The stored queue is never touched: `reorder` borrows the
/// tickets and returns a fresh ordering.
pub trait OrderingStrategy: Send + Sync {
    /// Name of this strategy for logging/metrics.
    fn name(&self) -> &'static str;

    /// Compute the processing order for `tickets`.
    ///
    /// The result may contain fewer tickets than the input (a policy is
    /// free to drop everything); the input itself must stay unchanged.
    fn reorder(&self, tickets: &[Ticket]) -> Vec<Ticket>;
}
