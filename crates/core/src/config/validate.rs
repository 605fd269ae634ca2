use super::{
    types::{Config, StrategyKind},
    ConfigError,
};

/// Validate configuration
/// Currently validates:
/// - Identifier length is nonzero
/// - A seed is only set for the random strategy
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.ticket.id_length == 0 {
        return Err(ConfigError::ValidationError(
            "ticket.id_length cannot be 0".to_string(),
        ));
    }

    if config.strategy.seed.is_some() && config.strategy.kind != StrategyKind::Random {
        return Err(ConfigError::ValidationError(
            "strategy.seed is only valid when strategy.kind is \"random\"".to_string(),
        ));
    }

    Ok(())
}
