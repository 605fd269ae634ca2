//! Support ticket types and identifier generation.

pub mod idgen;
mod types;

pub use types::Ticket;
