//! Shared test fixtures.

use crate::ticket::Ticket;

/// Build a ticket with a fixed identifier.
pub fn ticket(id: &str, customer: &str, issue: &str) -> Ticket {
    Ticket::new(id, customer, issue)
}

/// Build `n` tickets with identifiers "T1".."Tn".
pub fn tickets(n: usize) -> Vec<Ticket> {
    (1..=n)
        .map(|i| {
            ticket(
                &format!("T{}", i),
                &format!("customer-{}", i),
                &format!("issue-{}", i),
            )
        })
        .collect()
}
