//! Ticket queue coordinator.

use tracing::{debug, info};

use crate::metrics::{EMPTY_PROCESS_RUNS, TICKETS_PROCESSED, TICKETS_SUBMITTED};
use crate::ordering::OrderingStrategy;
use crate::sink::OutputSink;
use crate::ticket::{idgen, Ticket};

/// Notice emitted when a strategy yields nothing to process.
pub const EMPTY_QUEUE_NOTICE: &str = "There are no tickets to process. Well done!";

const SEPARATOR: &str = "===================================";

/// Coordinator that owns submitted tickets and drives per-ticket
/// processing in the order an [`OrderingStrategy`] produces.
///
/// The stored sequence only grows, via [`submit`](Self::submit); reordering
/// for processing operates on a derived copy and never mutates it.
pub struct TicketQueue {
    tickets: Vec<Ticket>,
    id_length: usize,
}

impl TicketQueue {
    /// Create an empty queue with the default identifier length.
    pub fn new() -> Self {
        Self::with_id_length(idgen::DEFAULT_ID_LENGTH)
    }

    /// Create an empty queue with a custom identifier length.
    pub fn with_id_length(id_length: usize) -> Self {
        Self {
            tickets: Vec::new(),
            id_length,
        }
    }

    /// Number of submitted tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True if no tickets have been submitted.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Submitted tickets, in submission order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Submit a new ticket for `customer` with the given `issue`.
    ///
    /// Appends only; nothing is ever removed from the queue. Returns a
    /// borrow of the stored ticket so callers can log the assigned id.
    pub fn submit(&mut self, customer: impl Into<String>, issue: impl Into<String>) -> &Ticket {
        let id = idgen::generate(&mut rand::thread_rng(), self.id_length);
        let ticket = Ticket::new(id, customer, issue);
        debug!(
            ticket_id = %ticket.id,
            customer = %ticket.customer,
            "ticket submitted"
        );
        TICKETS_SUBMITTED.inc();
        self.tickets.push(ticket);
        &self.tickets[self.tickets.len() - 1]
    }

    /// Process queued tickets in the order produced by `strategy`.
    ///
    /// An empty ordering is a normal terminal case, not a failure: the
    /// empty-queue notice is written to the sink and nothing else happens.
    pub fn process(&self, strategy: &dyn OrderingStrategy, sink: &mut dyn OutputSink) {
        let ordered = strategy.reorder(&self.tickets);

        if ordered.is_empty() {
            info!(strategy = strategy.name(), "nothing to process");
            EMPTY_PROCESS_RUNS.inc();
            sink.write_line(EMPTY_QUEUE_NOTICE);
            return;
        }

        info!(
            strategy = strategy.name(),
            count = ordered.len(),
            "processing tickets"
        );
        for ticket in &ordered {
            self.process_ticket(ticket, sink);
            TICKETS_PROCESSED.with_label_values(&[strategy.name()]).inc();
        }
    }

    /// Emit the operator-facing block for a single ticket.
    fn process_ticket(&self, ticket: &Ticket, sink: &mut dyn OutputSink) {
        sink.write_line(SEPARATOR);
        sink.write_line(&format!("Processing ticket id: {}", ticket.id));
        sink.write_line(&format!("Customer: {}", ticket.customer));
        sink.write_line(&format!("Issue: {}", ticket.issue));
        sink.write_line(&format!(
            "Submitted: {}",
            ticket.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        sink.write_line(SEPARATOR);
    }
}

impl Default for TicketQueue {
    fn default() -> Self {
        Self::new()
    }
}
