//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use tracing::{error, info};

use super::handlers::{CheckCommandHandler, DemoCommandHandler, PublishCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult, error_chain};
use crate::services::NotificationService;
use crate::services::notifications::create_producer;

/// Execute a CLI command with the given settings
///
/// Every command except `check` builds the configured producer first and
/// closes it once the command has finished, whatever its outcome.
///
/// # Errors
/// Returns validation errors, producer construction errors, and send errors
/// from `announce`/`send`
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    let command = cli.selected_command();
    if command == Commands::Check {
        return CheckCommandHandler::new(settings).execute();
    }

    let producer = create_producer(&settings.broker).await?;
    info!(
        producer = producer.name(),
        target = %settings.broker.target(),
        "Producer ready"
    );

    run_and_close(&command, NotificationService::new(producer)).await
}

/// Run a publishing command, then close the service's producer once
///
/// A close failure is logged and does not replace the command's result.
pub async fn run_and_close(command: &Commands, service: NotificationService) -> AppResult<()> {
    let result = run_with_service(command, &service).await;

    if let Err(e) = service.producer().close().await {
        error!(error = %error_chain(&e), "Failed to close producer");
    }

    result
}

/// Run a publishing command against an already constructed service
pub async fn run_with_service(command: &Commands, service: &NotificationService) -> AppResult<()> {
    match command {
        Commands::Demo => DemoCommandHandler::new(service.clone()).execute().await,
        Commands::Announce { title, message } => {
            PublishCommandHandler::new(service.clone())
                .announce(title, message)
                .await
        }
        Commands::Send {
            kind,
            title,
            message,
            targets,
        } => {
            PublishCommandHandler::new(service.clone())
                .send(kind, title, message, targets.clone())
                .await
        }
        // Handled before a producer is built
        Commands::Check => Ok(()),
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate()
        .map_err(|msg| AppError::validation("cli_arguments", msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::RecordingProducer;
    use clap::Parser;
    use std::sync::Arc;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[tokio::test]
    async fn test_execute_check_does_not_connect() {
        // Nothing listens on the discard port; check must not try
        let mut settings = Settings::default();
        settings.broker.kafka.brokers = vec!["127.0.0.1:9".to_string()];

        let result = execute_command(&parse(&["notifier-rs", "check"]), settings).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_send_keeps_blank_target() {
        let producer = Arc::new(RecordingProducer::default());
        let service = NotificationService::new(producer.clone());

        let command = parse(&[
            "notifier-rs", "send", "--type", "t", "--title", "t", "--message", "m", "--target", " ",
        ])
        .selected_command();
        run_with_service(&command, &service).await.unwrap();

        assert_eq!(producer.sent()[0].targets, vec![" "]);
    }

    #[tokio::test]
    async fn test_run_default_command_is_demo() {
        let producer = Arc::new(RecordingProducer::default());
        let service = NotificationService::new(producer.clone());

        let command = parse(&["notifier-rs"]).selected_command();
        run_with_service(&command, &service).await.unwrap();

        assert_eq!(producer.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_run_send_passes_targets() {
        let producer = Arc::new(RecordingProducer::default());
        let service = NotificationService::new(producer.clone());

        let command = parse(&[
            "notifier-rs", "send", "--type", "marketing", "--title", "T", "--message", "M",
            "--target", "a,b",
        ])
        .selected_command();
        run_with_service(&command, &service).await.unwrap();

        assert_eq!(producer.sent()[0].targets, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_run_announce_failure_propagates() {
        let producer = Arc::new(RecordingProducer::failing("nope"));
        let service = NotificationService::new(producer);

        let command = Commands::Announce {
            title: "T".to_string(),
            message: "M".to_string(),
        };
        assert!(matches!(
            run_with_service(&command, &service).await,
            Err(AppError::Producer(_))
        ));
    }

    #[tokio::test]
    async fn test_run_and_close_closes_once_after_demo() {
        let producer = Arc::new(RecordingProducer::default());
        let service = NotificationService::new(producer.clone());

        run_and_close(&Commands::Demo, service).await.unwrap();

        assert_eq!(producer.sent().len(), 2);
        assert_eq!(producer.close_count(), 1);
    }

    #[tokio::test]
    async fn test_run_and_close_closes_once_after_failed_announce() {
        let producer = Arc::new(RecordingProducer::failing("broker down"));
        let service = NotificationService::new(producer.clone());

        let command = Commands::Announce {
            title: "T".to_string(),
            message: "M".to_string(),
        };
        let result = run_and_close(&command, service).await;

        assert!(matches!(result, Err(AppError::Producer(_))));
        assert_eq!(producer.close_count(), 1);
    }
}
