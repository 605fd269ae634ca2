use serde::{Deserialize, Serialize};

use crate::ticket::idgen;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub ticket: TicketConfig,
}

/// Ordering strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrategyConfig {
    /// Which ordering policy processes the queue.
    #[serde(default = "default_kind")]
    pub kind: StrategyKind,
    /// Fixed RNG seed; only honored by the random strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            seed: None,
        }
    }
}

fn default_kind() -> StrategyKind {
    StrategyKind::Fifo
}

/// Available ordering strategies
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Fifo,
    Filo,
    Discard,
    Random,
}

/// Ticket configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketConfig {
    /// Length of generated ticket identifiers.
    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            id_length: default_id_length(),
        }
    }
}

fn default_id_length() -> usize {
    idgen::DEFAULT_ID_LENGTH
}
