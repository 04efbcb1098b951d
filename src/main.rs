use clap::Parser;
use notifier_rs::cli::{self, Cli};
use notifier_rs::error::error_chain;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match cli::load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", error_chain(&e));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli::init_logger_from_settings(&settings) {
        eprintln!("Logger initialization error: {:#}", e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(
        version = notifier_rs::pkg_version(),
        broker = %settings.broker.kind,
        "Starting notifier"
    );

    match cli::execute_command(&cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %error_chain(&e), "Command failed");
            ExitCode::FAILURE
        }
    }
}
