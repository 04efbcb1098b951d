//! Check command handler
//!
//! Validates the merged configuration and reports where notifications would go.

use crate::config::settings::Settings;
use crate::error::AppResult;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    /// Create a new check command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration and print the resolved producer target
    ///
    /// No connection to the broker is attempted.
    ///
    /// # Errors
    /// Configuration validation errors
    pub fn execute(&self) -> AppResult<()> {
        for line in self.report()? {
            println!("{}", line);
        }
        println!("Check completed successfully - configuration is ready to publish");
        Ok(())
    }

    /// Lines printed by `execute`
    pub fn report(&self) -> AppResult<Vec<String>> {
        self.config.validate()?;

        let broker = &self.config.broker;
        Ok(vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Producer would publish to: {}", broker.target()),
            format!("✓ Notification ids: {}", broker.id_strategy.as_str()),
            format!("✓ Log level: {}", self.config.logger.level),
        ])
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrokerKind;
    use crate::error::AppError;

    #[test]
    fn test_report_for_default_kafka() {
        let handler = CheckCommandHandler::new(Settings::default());
        let report = handler.report().unwrap();

        assert_eq!(report[0], "✓ Configuration is valid");
        assert_eq!(
            report[1],
            "✓ Producer would publish to: kafka topic 'notifications' on 172.19.245.31:9092"
        );
        assert_eq!(report[2], "✓ Notification ids: nanos");
        assert!(handler.execute().is_ok());
    }

    #[test]
    fn test_report_for_kinesis() {
        let mut settings = Settings::default();
        settings.broker.kind = BrokerKind::Kinesis;
        let report = CheckCommandHandler::new(settings).report().unwrap();

        assert_eq!(
            report[1],
            "✓ Producer would publish to: kinesis stream 'notifications' in us-east-1"
        );
    }

    #[test]
    fn test_invalid_configuration_fails() {
        let mut settings = Settings::default();
        settings.broker.kafka.brokers.clear();
        let handler = CheckCommandHandler::new(settings);

        match handler.execute() {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "broker.kafka.brokers"),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
