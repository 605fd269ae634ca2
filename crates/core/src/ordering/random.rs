use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::OrderingStrategy;
use crate::ticket::Ticket;

/// Strategy that processes tickets in a uniformly shuffled order.
///
/// The RNG is owned by the strategy rather than taken from a global
/// source, so tests can seed it for a reproducible permutation.
pub struct RandomStrategy {
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    /// Create a strategy seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a strategy with a fixed seed for deterministic ordering.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderingStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn reorder(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let mut ordered = tickets.to_vec();
        if ordered.len() > 1 {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            ordered.shuffle(&mut *rng);
        }
        ordered
    }
}
