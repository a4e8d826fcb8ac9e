//! Configuration loading and validation.
//!
//! Configuration is an optional TOML file. Every section may be omitted, in
//! which case its defaults apply:
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//!
//! [pricing]
//! liquidity_policy = "average"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::domain::LiquidityPolicy;
use crate::error::{ConfigError, Result};

mod logging;

pub use logging::LoggingConfig;

/// Pricing defaults applied by the command-line host.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Policy used to derive `b` for pairwise prices and trade costs when no
    /// explicit liquidity is given, and by `lmsr liquidity` without `--policy`.
    pub liquidity_policy: LiquidityPolicy,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub pricing: PricingConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.pricing.liquidity_policy, LiquidityPolicy::Average);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn pricing_section_sets_policy() {
        let config = Config::parse("[pricing]\nliquidity_policy = \"max\"\n").unwrap();
        assert_eq!(config.pricing.liquidity_policy, LiquidityPolicy::Max);
    }

    #[test]
    fn unknown_policy_fails_to_parse() {
        let result = Config::parse("[pricing]\nliquidity_policy = \"median\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
