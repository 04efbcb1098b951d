//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    BrokerKind, BrokerSettings, FileSettings, KafkaSettings, KinesisSettings, LoggerSettings,
    Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Valid Kafka acknowledgement settings
const VALID_ACKS: &[&str] = &["0", "1", "all", "-1"];

impl KafkaSettings {
    /// Validate Kafka producer configuration
    ///
    /// # Validation Rules
    /// - At least one broker, none of them blank
    /// - Topic must not be empty
    /// - Acks must be one of: 0, 1, all, -1
    /// - Timeouts must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brokers.is_empty() {
            return Err(ConfigError::validation(
                "broker.kafka.brokers",
                "At least one Kafka broker address is required.",
            ));
        }

        if self.brokers.iter().any(|broker| broker.trim().is_empty()) {
            return Err(ConfigError::validation(
                "broker.kafka.brokers",
                "Kafka broker addresses cannot be empty.",
            ));
        }

        if self.topic.trim().is_empty() {
            return Err(ConfigError::validation(
                "broker.kafka.topic",
                "Kafka topic is required.",
            ));
        }

        if !VALID_ACKS.contains(&self.acks.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "broker.kafka.acks".to_string(),
                message: format!(
                    "Invalid acks '{}'. Valid values are: {}",
                    self.acks,
                    VALID_ACKS.join(", ")
                ),
            });
        }

        if self.message_timeout_ms == 0 {
            return Err(ConfigError::validation(
                "broker.kafka.message_timeout_ms",
                "Message timeout must be greater than 0 milliseconds.",
            ));
        }

        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::validation(
                "broker.kafka.connect_timeout_ms",
                "Connect timeout must be greater than 0 milliseconds.",
            ));
        }

        Ok(())
    }
}

impl KinesisSettings {
    /// Validate Kinesis producer configuration
    ///
    /// # Validation Rules
    /// - Region and stream must not be empty
    /// - Endpoint URL, if set, must use http or https
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::validation(
                "broker.kinesis.region",
                "AWS region is required.",
            ));
        }

        if self.stream.trim().is_empty() {
            return Err(ConfigError::validation(
                "broker.kinesis.stream",
                "Kinesis stream name is required.",
            ));
        }

        if let Some(endpoint) = &self.endpoint_url
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::ValidationError {
                field: "broker.kinesis.endpoint_url".to_string(),
                message: format!("Endpoint URL must use http or https, got: '{}'", endpoint),
            });
        }

        Ok(())
    }
}

impl BrokerSettings {
    /// Validate the settings of the selected backend
    ///
    /// Settings of the backend that is not selected are not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            BrokerKind::Kafka => self.kafka.validate(),
            BrokerKind::Kinesis => self.kinesis.validate(),
        }
    }
}

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        // If file logging is enabled, path must not be empty
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// This method validates all sub-configurations and returns the first
    /// validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.broker.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
