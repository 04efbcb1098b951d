//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::BrokerKind;

/// Publish notifications to Kafka or Kinesis
#[derive(Parser, Debug)]
#[command(name = "notifier-rs")]
#[command(about = "Publish notifications to Kafka or Kinesis")]
#[command(long_about = "
notifier-rs publishes JSON notifications to a Kafka topic or an AWS Kinesis
stream. Broker settings come from layered configuration files, NOTIFIER_*
environment variables and the flags below, in increasing priority.

EXAMPLES:
    # Send the two demo notifications through Kafka
    notifier-rs

    # Use a local Kafka cluster
    notifier-rs --kafka-brokers localhost:9092,localhost:9093 demo

    # Broadcast a system announcement through Kinesis
    notifier-rs --broker kinesis --aws-region eu-west-1 \\
        announce --title 'System Update' --message 'Back in 5 minutes'

    # Send a targeted notification
    notifier-rs send --type marketing --title 'Sale' --message '50% off' \\
        --target premium_users --target active_users

    # Show the resolved target without connecting
    notifier-rs --env production check
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute (default: demo)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Message broker backend
    ///
    /// Default: kafka (or `broker.kind` from configuration)
    #[arg(long, value_enum, value_name = "BROKER")]
    pub broker: Option<Broker>,

    /// Kafka bootstrap brokers, comma separated
    ///
    /// Default: 172.19.245.31:9092 (or `broker.kafka.brokers` from configuration)
    #[arg(
        long,
        value_name = "LIST",
        value_delimiter = ',',
        value_parser = super::validation::validate_broker_address
    )]
    pub kafka_brokers: Option<Vec<String>>,

    /// Kafka topic to publish to
    ///
    /// Default: notifications
    #[arg(long, value_name = "NAME", value_parser = super::validation::validate_name)]
    pub kafka_topic: Option<String>,

    /// AWS region of the Kinesis stream
    ///
    /// Default: us-east-1
    #[arg(long, value_name = "REGION", value_parser = super::validation::validate_name)]
    pub aws_region: Option<String>,

    /// Kinesis stream to publish to
    ///
    /// Default: notifications
    #[arg(long, value_name = "NAME", value_parser = super::validation::validate_name)]
    pub kinesis_stream: Option<String>,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered configuration directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/notifier-rs/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` is layered over `default.toml`.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send a system announcement and a targeted marketing notification (default)
    ///
    /// Delivery failures are logged and do not change the exit status.
    Demo,

    /// Broadcast a system announcement to all users
    ///
    /// Examples:
    ///   notifier-rs announce --title 'System Update' --message 'Maintenance at 22:00'
    Announce {
        /// Announcement title
        #[arg(long)]
        title: String,

        /// Announcement body
        #[arg(long)]
        message: String,
    },

    /// Send a notification of any type to specific targets
    ///
    /// Examples:
    ///   notifier-rs send --type marketing --title 'Sale' --message '50% off' --target premium_users
    ///   notifier-rs send --type digest --title 'Weekly' --message 'Top posts' --target a,b,c
    Send {
        /// Notification type, e.g. marketing
        #[arg(long = "type", value_name = "TYPE", value_parser = super::validation::validate_name)]
        kind: String,

        /// Notification title
        #[arg(long)]
        title: String,

        /// Notification body
        #[arg(long)]
        message: String,

        /// Audience identifier; repeat the flag or separate with commas
        #[arg(long = "target", value_name = "TARGET", value_delimiter = ',')]
        targets: Vec<String>,
    },

    /// Validate configuration and print the producer target without connecting
    Check,
}

/// Broker backend options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Broker {
    #[value(name = "kafka")]
    Kafka,
    #[value(name = "kinesis")]
    Kinesis,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Subcommand to run, `demo` when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Demo)
    }

    /// Validate CLI arguments beyond what clap checks
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<Broker> for BrokerKind {
    fn from(broker: Broker) -> Self {
        match broker {
            Broker::Kafka => BrokerKind::Kafka,
            Broker::Kinesis => BrokerKind::Kinesis,
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
