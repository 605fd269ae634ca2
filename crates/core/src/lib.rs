pub mod config;
pub mod metrics;
pub mod ordering;
pub mod queue;
pub mod sink;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, StrategyConfig,
    StrategyKind, TicketConfig,
};
pub use ordering::{
    create_strategy, DiscardStrategy, FifoStrategy, FiloStrategy, OrderingStrategy, RandomStrategy,
};
pub use queue::{TicketQueue, EMPTY_QUEUE_NOTICE};
pub use sink::{ConsoleSink, OutputSink};
pub use ticket::Ticket;
