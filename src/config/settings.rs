//! Configuration settings structures for notifier-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
use crate::services::notifications::IdStrategy;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "notifier-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_kafka_brokers() -> Vec<String> {
    vec!["172.19.245.31:9092".to_string()]
}

fn default_topic() -> String {
    "notifications".to_string()
}

fn default_acks() -> String {
    "1".to_string()
}

fn default_message_timeout_ms() -> u64 {
    5_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_stream() -> String {
    "notifications".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/notifier.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Broker Configuration
// ============================================================================

/// Message transport backing the notification producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrokerKind {
    #[default]
    Kafka,
    Kinesis,
}

impl BrokerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrokerKind::Kafka => "kafka",
            BrokerKind::Kinesis => "kinesis",
        }
    }
}

impl std::fmt::Display for BrokerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kafka producer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaSettings {
    /// Bootstrap broker addresses ("host:port")
    #[serde(default = "default_kafka_brokers")]
    pub brokers: Vec<String>,

    /// Destination topic
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Required acknowledgements: "0", "1", "all" or "-1"
    #[serde(default = "default_acks")]
    pub acks: String,

    /// Time a message may wait for delivery, in milliseconds
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,

    /// Time allowed for the initial broker contact, in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for KafkaSettings {
    fn default() -> Self {
        Self {
            brokers: default_kafka_brokers(),
            topic: default_topic(),
            acks: default_acks(),
            message_timeout_ms: default_message_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

/// Kinesis producer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinesisSettings {
    /// AWS region
    #[serde(default = "default_region")]
    pub region: String,

    /// Destination stream name
    #[serde(default = "default_stream")]
    pub stream: String,

    /// Custom endpoint, e.g. a local Kinesis emulator
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for KinesisSettings {
    fn default() -> Self {
        Self {
            region: default_region(),
            stream: default_stream(),
            endpoint_url: None,
        }
    }
}

/// Broker selection and per-backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BrokerSettings {
    /// Selected backend
    #[serde(default)]
    pub kind: BrokerKind,

    /// How ids are generated for notifications sent without one
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Kafka settings, used when `kind = "kafka"`
    #[serde(default)]
    pub kafka: KafkaSettings,

    /// Kinesis settings, used when `kind = "kinesis"`
    #[serde(default)]
    pub kinesis: KinesisSettings,
}

impl BrokerSettings {
    /// Human readable destination of the selected backend
    pub fn target(&self) -> String {
        match self.kind {
            BrokerKind::Kafka => format!(
                "kafka topic '{}' on {}",
                self.kafka.topic,
                self.kafka.brokers.join(",")
            ),
            BrokerKind::Kinesis => format!(
                "kinesis stream '{}' in {}",
                self.kinesis.stream, self.kinesis.region
            ),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = self.console.into_console_config();
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl ConsoleSettings {
    /// Convert ConsoleSettings to ConsoleConfig
    pub fn into_console_config(self) -> ConsoleConfig {
        ConsoleConfig::new(self.enabled, self.colored)
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            }
        })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Broker configuration
    #[serde(default)]
    pub broker: BrokerSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
