//! Core ticket data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A support ticket representing one customer-reported issue awaiting
/// processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Opaque identifier, assigned at construction and never mutated.
    pub id: String,

    /// Customer who reported the issue.
    pub customer: String,

    /// Free-text description of the issue.
    pub issue: String,

    /// When the ticket was submitted.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a ticket with an already-generated identifier.
    ///
    /// Inputs are taken as-is; no validation or sanitization is performed.
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            issue: issue.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_creation() {
        let ticket = Ticket::new("ABCDEFGH", "Jon Smith", "My computer makes strange sounds!");
        assert_eq!(ticket.id, "ABCDEFGH");
        assert_eq!(ticket.customer, "Jon Smith");
        assert_eq!(ticket.issue, "My computer makes strange sounds!");
    }

    #[test]
    fn test_ticket_accepts_empty_inputs() {
        let ticket = Ticket::new("ID", "", "");
        assert_eq!(ticket.customer, "");
        assert_eq!(ticket.issue, "");
    }

    #[test]
    fn test_ticket_serialization() {
        let ticket = Ticket::new("QWERTYUI", "Linus", "Upload is broken");
        let json = serde_json::to_string(&ticket).unwrap();
        assert!(json.contains("\"id\":\"QWERTYUI\""));
        assert!(json.contains("\"customer\":\"Linus\""));

        let deserialized: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ticket);
    }
}
