//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)

pub mod config;
pub mod error;
pub(crate) mod writer;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use writer::LogFileWriter;

/// Initialize the global logger with the given configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = build_filter(&config.level);

    match (config.console.enabled, config.file.enabled) {
        (true, true) => init_both(&config, filter)?,
        (true, false) => init_console_only(&config.console, filter)?,
        (false, true) => init_file_only(&config.file, filter)?,
        (false, false) => {
            return Err(
                LoggerError::config("At least one output (console or file) must be enabled").into(),
            );
        }
    }

    Ok(())
}

/// Level directive for everything, with the chatty client libraries held at `warn`
fn build_filter(level: &str) -> EnvFilter {
    let directives =
        format!("{level},rdkafka=warn,aws_config=warn,aws_smithy_runtime=warn,hyper=warn");
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn install_error(err: impl std::fmt::Display) -> LoggerError {
    LoggerError::install(err.to_string())
}

fn init_console_only(config: &ConsoleConfig, filter: EnvFilter) -> Result<(), LoggerError> {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(install_error)
}

fn init_file_only(config: &FileConfig, filter: EnvFilter) -> Result<(), LoggerError> {
    let writer = LogFileWriter::new(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Full => registry
            .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .compact()
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_ansi(false).json().with_writer(writer))
            .try_init(),
    }
    .map_err(install_error)
}

fn init_both(config: &LoggerConfig, filter: EnvFilter) -> Result<(), LoggerError> {
    let use_ansi = config.console.colored && std::io::stdout().is_terminal();
    let writer = LogFileWriter::new(&config.file)?;

    // Each arm stacks onto a different subscriber type, so the layer is built per arm
    macro_rules! console_layer {
        () => {
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true)
        };
    }

    // File layer goes first so console ANSI codes do not leak into span fields.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    let registry = tracing_subscriber::registry().with(filter);
    match config.file.format {
        LogFormat::Full => registry
            .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
            .with(console_layer!())
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .compact()
                    .with_writer(writer),
            )
            .with(console_layer!())
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_ansi(false).json().with_writer(writer))
            .with(console_layer!())
            .try_init(),
    }
    .map_err(install_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_build_filter_accepts_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let rendered = build_filter(level).to_string();
            assert!(rendered.contains(level), "filter {rendered} lacks {level}");
            assert!(rendered.contains("rdkafka=warn"));
        }
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let config = LoggerConfig {
            level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(init_logger(config).is_err());
    }

    #[test]
    fn test_init_both_accepts_every_file_format() {
        for format in [LogFormat::Full, LogFormat::Compact, LogFormat::Json] {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("notifier.log");
            let config = LoggerConfig {
                console: ConsoleConfig::new(true, false),
                file: FileConfig {
                    enabled: true,
                    path: path.clone(),
                    append: true,
                    format,
                },
                level: "info".to_string(),
            };

            // Only the first install in this binary can succeed; later ones
            // must fail with an install error, not a configuration error
            if let Err(e) = init_logger(config) {
                assert!(e.to_string().contains("install"), "unexpected error: {e}");
            }
            assert!(path.exists());
        }
    }

    #[test]
    fn test_init_file_only_writes_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/notifier.log");
        let config = LoggerConfig {
            console: ConsoleConfig::new(false, false),
            file: FileConfig {
                enabled: true,
                path: PathBuf::from(&path),
                append: false,
                format: LogFormat::Json,
            },
            level: "info".to_string(),
        };

        // Another test in this binary may have installed the global subscriber first
        if init_logger(config).is_ok() {
            tracing::info!(target: "notifier_test", "logger ready");
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.contains("\"logger ready\""));
        } else {
            assert!(path.exists());
        }
    }
}
