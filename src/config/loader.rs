//! Configuration loader for notifier-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
pub const CONFIG_DIR_ENV: &str = "NOTIFIER_CONFIG_DIR";

/// Environment variable for specific configuration file
pub const CONFIG_FILE_ENV: &str = "NOTIFIER_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "NOTIFIER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Keys whose environment values are comma-separated lists
const ENV_LIST_KEYS: &[&str] = &["broker.kafka.brokers"];

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. Built-in defaults
/// 2. `default.toml` - Base configuration (optional)
/// 3. `{environment}.toml` - Environment-specific configuration (optional)
/// 4. `local.toml` - Local overrides (optional)
/// 5. `NOTIFIER_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`NOTIFIER_CONFIG_DIR`)
    /// - Specific configuration file (`NOTIFIER_CONFIG_FILE`)
    /// - Application environment (`NOTIFIER_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `NOTIFIER_CONFIG_DIR` and `NOTIFIER_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "NOTIFIER_CONFIG_DIR and NOTIFIER_CONFIG_FILE cannot both be set. \
                 Use NOTIFIER_CONFIG_DIR for layered configuration or \
                 NOTIFIER_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir,
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Use a single configuration file instead of the layered directory
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the detected application environment
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Load configuration from all sources
    ///
    /// If a configuration file is set, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the single configuration file does not exist
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            Self::add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // NOTIFIER_BROKER__KAFKA__TOPIC -> broker.kafka.topic
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, false)?;

        let env_path = self.config_dir.join(self.environment.file_name());
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        let builder = Self::add_file_source(builder, &local_path, false)?;

        Ok(builder)
    }

    /// Add a file source to the config builder
    ///
    /// # Arguments
    ///
    /// * `builder` - The config builder to add the source to
    /// * `path` - Path to the configuration file
    /// * `required` - Whether the file is required to exist
    fn add_file_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    /// Add environment variable source to the config builder
    ///
    /// Environment variables with prefix `NOTIFIER_` are mapped to configuration keys.
    /// Double underscores (`__`) are used as separators for nested keys.
    ///
    /// Examples:
    /// - `NOTIFIER_BROKER__KIND` -> `broker.kind`
    /// - `NOTIFIER_BROKER__KAFKA__BROKERS=a:9092,b:9092` -> `broker.kafka.brokers`
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        let mut source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .ignore_empty(true)
            .try_parsing(true)
            .list_separator(",");
        for key in ENV_LIST_KEYS {
            source = source.with_list_parse_key(key);
        }
        builder.add_source(source)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::BrokerKind;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_VARS: &[&str] = &[
        "NOTIFIER_CONFIG_DIR",
        "NOTIFIER_CONFIG_FILE",
        "NOTIFIER_APP_ENV",
        "NOTIFIER_BROKER__KIND",
        "NOTIFIER_BROKER__KAFKA__TOPIC",
        "NOTIFIER_BROKER__KAFKA__BROKERS",
    ];

    /// Helper to create a temporary config directory with files
    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::write(&path, content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        /// Starts from a clean slate for every variable the loader reads
        fn clean() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in ENV_VARS {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Restore in reverse so the first recorded value wins
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_CONFIG: &str = r#"
[application]
name = "test-app"
version = "1.0.0"

[broker]
kind = "kafka"

[broker.kafka]
brokers = ["localhost:9092"]
topic = "default-topic"

[broker.kinesis]
region = "us-east-1"
stream = "default-stream"

[logger]
level = "info"
"#;

    #[test]
    fn test_config_loader_new_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), &PathBuf::from("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        env.set("NOTIFIER_CONFIG_DIR", "/custom/config");
        env.set("NOTIFIER_CONFIG_FILE", "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("NOTIFIER_CONFIG_DIR"));
                assert!(msg.contains("NOTIFIER_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_loader_environment_from_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        env.set("NOTIFIER_APP_ENV", "production");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }

    #[test]
    fn test_load_empty_dir_uses_defaults() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        let temp_dir = setup_config_dir(&[]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_default_toml_only() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_CONFIG)]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        assert_eq!(settings.application.name, "test-app");
        assert_eq!(settings.broker.kafka.brokers, vec!["localhost:9092".to_string()]);
        assert_eq!(settings.broker.kafka.topic, "default-topic");
        assert_eq!(settings.broker.kinesis.stream, "default-stream");
    }

    #[test]
    fn test_load_full_precedence_chain() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        let development_config = r#"
[application]
name = "dev-app"

[broker.kafka]
topic = "dev-topic"

[broker.kinesis]
stream = "dev-stream"
"#;

        let local_config = r#"
[broker.kafka]
topic = "local-topic"
"#;

        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_CONFIG),
            ("development.toml", development_config),
            ("local.toml", local_config),
        ]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("NOTIFIER_BROKER__KIND", "kinesis");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        // Environment variable has highest priority
        assert_eq!(settings.broker.kind, BrokerKind::Kinesis);
        // local.toml overrides development.toml
        assert_eq!(settings.broker.kafka.topic, "local-topic");
        // development.toml overrides default.toml
        assert_eq!(settings.application.name, "dev-app");
        assert_eq!(settings.broker.kinesis.stream, "dev-stream");
        // default.toml provides base values
        assert_eq!(settings.application.version, "1.0.0");
    }

    #[test]
    fn test_load_env_broker_list() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_CONFIG)]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("NOTIFIER_BROKER__KAFKA__BROKERS", "k1:9092,k2:9092");
        env.set("NOTIFIER_BROKER__KAFKA__TOPIC", "env-topic");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        assert_eq!(
            settings.broker.kafka.brokers,
            vec!["k1:9092".to_string(), "k2:9092".to_string()]
        );
        assert_eq!(settings.broker.kafka.topic, "env-topic");
    }

    #[test]
    fn test_load_single_file_mode() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        let single_config = r#"
[broker]
kind = "kinesis"

[broker.kinesis]
region = "eu-west-1"
stream = "single"
"#;
        let temp_dir = setup_config_dir(&[("single.toml", single_config)]);
        let config_file_path = temp_dir.path().join("single.toml");
        env.set("NOTIFIER_CONFIG_FILE", config_file_path.to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        assert_eq!(settings.broker.kind, BrokerKind::Kinesis);
        assert_eq!(settings.broker.kinesis.region, "eu-west-1");
        assert_eq!(settings.broker.kinesis.stream, "single");
    }

    #[test]
    fn test_load_missing_single_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();

        let result = ConfigLoader::new()
            .unwrap()
            .with_config_file("/definitely/not/here.toml")
            .load();

        match result {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("here.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_settings_rejected() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        let invalid_config = r#"
[broker.kafka]
topic = ""
"#;
        let temp_dir = setup_config_dir(&[("default.toml", invalid_config)]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().unwrap().load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
