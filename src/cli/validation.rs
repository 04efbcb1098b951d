//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate one Kafka bootstrap address, `host` or `host:port`
///
/// Applied to each element of a comma-separated list.
pub fn validate_broker_address(address_str: &str) -> Result<String, String> {
    let address = address_str.trim();

    if address.is_empty() {
        return Err("Broker address cannot be empty".to_string());
    }

    if address.chars().any(char::is_whitespace) {
        return Err(format!("Broker address cannot contain spaces: '{}'", address_str));
    }

    if let Some((host, port)) = address.rsplit_once(':') {
        if host.is_empty() {
            return Err(format!("Broker address is missing a host: '{}'", address_str));
        }

        match port.parse::<u16>() {
            Ok(0) | Err(_) => {
                return Err(format!(
                    "Broker port must be a number between 1 and 65535, got: '{}'",
                    port
                ));
            }
            Ok(_) => {}
        }
    }

    Ok(address.to_string())
}

/// Validate a topic, stream, region or notification type name
pub fn validate_name(name_str: &str) -> Result<String, String> {
    let name = name_str.trim();

    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.chars().any(char::is_whitespace) {
        return Err(format!("Name cannot contain spaces: '{}'", name_str));
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_broker_address_valid() {
        let valid = [
            "172.19.245.31:9092",
            "localhost:9092",
            "kafka-1.internal",
            "[::1]:9092",
            " padded:9092 ",
        ];

        for address in valid {
            let result = validate_broker_address(address);
            assert!(result.is_ok(), "Broker {} should be valid", address);
        }

        assert_eq!(validate_broker_address(" padded:9092 ").unwrap(), "padded:9092");
    }

    #[test]
    fn test_broker_address_invalid() {
        let invalid = ["", "   ", "host name:9092", ":9092", "host:0", "host:65536", "host:abc"];

        for address in invalid {
            let result = validate_broker_address(address);
            assert!(result.is_err(), "Broker '{}' should be invalid", address);
        }
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(validate_name("notifications").unwrap(), "notifications");
        assert_eq!(validate_name(" us-east-1 ").unwrap(), "us-east-1");

        for name in ["", "  ", "two words"] {
            assert!(validate_name(name).is_err(), "Name '{}' should be invalid", name);
        }
    }

    #[test]
    fn test_config_file_path_validation() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        let dir = file.path().parent().unwrap().to_str().unwrap();
        assert!(validate_config_file_path(dir).unwrap_err().contains("not a file"));

        assert!(
            validate_config_file_path("/definitely/missing.toml")
                .unwrap_err()
                .contains("does not exist")
        );
    }
}
