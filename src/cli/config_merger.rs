//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Applies CLI flags on top of file and environment configuration
///
/// CLI arguments override every other configuration source.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration the way the CLI asks for it
    ///
    /// `--config` switches the loader to single-file mode and `--env`
    /// replaces the environment read from `NOTIFIER_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }

        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied and validated
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_broker_overrides(&mut config, cli);
        self.apply_logging_overrides(&mut config, cli);

        config.validate()?;

        Ok(config)
    }

    fn apply_broker_overrides(&self, config: &mut Settings, cli: &Cli) {
        let broker = &mut config.broker;

        if let Some(kind) = cli.broker {
            broker.kind = kind.into();
        }

        if let Some(brokers) = &cli.kafka_brokers {
            broker.kafka.brokers = brokers.clone();
        }

        if let Some(topic) = &cli.kafka_topic {
            broker.kafka.topic = topic.clone();
        }

        if let Some(region) = &cli.aws_region {
            broker.kinesis.region = region.clone();
        }

        if let Some(stream) = &cli.kinesis_stream {
            broker.kinesis.stream = stream.clone();
        }
    }

    fn apply_logging_overrides(&self, config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
