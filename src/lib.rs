//! Notifier-RS Library
//!
//! Publishes notifications to Kafka or Kinesis behind a single producer trait.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
