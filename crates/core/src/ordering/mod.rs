//! Ticket ordering strategies.
//!
//! Each policy implements [`OrderingStrategy`]; the queue coordinator is
//! closed against new variants. Adding a policy means a new implementation
//! plus a [`StrategyKind`](crate::config::StrategyKind) arm in the factory.

mod discard;
mod fifo;
mod filo;
mod random;
mod traits;

pub use discard::DiscardStrategy;
pub use fifo::FifoStrategy;
pub use filo::FiloStrategy;
pub use random::RandomStrategy;
pub use traits::OrderingStrategy;

use crate::config::{StrategyConfig, StrategyKind};

/// Factory function to create an ordering strategy from config
pub fn create_strategy(config: &StrategyConfig) -> Box<dyn OrderingStrategy> {
    match config.kind {
        StrategyKind::Fifo => Box::new(FifoStrategy::new()),
        StrategyKind::Filo => Box::new(FiloStrategy::new()),
        StrategyKind::Discard => Box::new(DiscardStrategy::new()),
        StrategyKind::Random => match config.seed {
            Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
            None => Box::new(RandomStrategy::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_strategy_fifo() {
        let config = StrategyConfig {
            kind: StrategyKind::Fifo,
            seed: None,
        };
        assert_eq!(create_strategy(&config).name(), "fifo");
    }

    #[test]
    fn test_create_strategy_filo() {
        let config = StrategyConfig {
            kind: StrategyKind::Filo,
            seed: None,
        };
        assert_eq!(create_strategy(&config).name(), "filo");
    }

    #[test]
    fn test_create_strategy_discard() {
        let config = StrategyConfig {
            kind: StrategyKind::Discard,
            seed: None,
        };
        assert_eq!(create_strategy(&config).name(), "discard");
    }

    #[test]
    fn test_create_strategy_random_with_seed() {
        let config = StrategyConfig {
            kind: StrategyKind::Random,
            seed: Some(42),
        };
        let strategy = create_strategy(&config);
        assert_eq!(strategy.name(), "random");

        // Same seed, same permutation
        let tickets = crate::testing::fixtures::tickets(5);
        let other = create_strategy(&config);
        let a: Vec<_> = strategy.reorder(&tickets).iter().map(|t| t.id.clone()).collect();
        let b: Vec<_> = other.reorder(&tickets).iter().map(|t| t.id.clone()).collect();
        assert_eq!(a, b);
    }
}
