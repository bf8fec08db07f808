//! Configuration module for Lei Trie.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables. The result is validated before use.

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub mod trie;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LEI";

/// Loads the default configuration file merged with environment overrides.
///
/// A missing default file is not an error; defaults are used instead.
pub fn load_default_config() -> ConfigResult<LeiConfig> {
    load_config_or_default(DEFAULT_CONFIG_PATH, ENV_PREFIX)
}

/// Loads `path` merged with `env_prefix` overrides, falling back to the
/// built-in defaults (still with overrides) when the file does not exist.
pub fn load_config_or_default<P: AsRef<Path>>(path: P, env_prefix: &str) -> ConfigResult<LeiConfig> {
    match ConfigLoader::new(Some(path), env_prefix).load() {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(path)) => {
            tracing::warn!("Configuration file not found at: {}", path.display());
            ConfigLoader::new(None::<&Path>, env_prefix).load()
        }
        Err(e) => Err(e),
    }
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Lei Trie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LeiConfig {
    /// Log configuration
    pub log: LogConfig,

    /// Trie configuration
    pub trie: trie::TrieConfig,
}

impl Validate for LeiConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.log.validate()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Lei Trie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(LeiConfig)` if the configuration was loaded and is valid
    /// * `Err(ConfigError)` if the file is missing, malformed or fails validation
    pub fn load(&self) -> ConfigResult<LeiConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&LeiConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let lei_config: LeiConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        lei_config.validate()?;
        tracing::debug!(prefix = %self.env_prefix, "Configuration loaded");

        Ok(lei_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<LeiConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: LeiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &LeiConfig {
        &self.config
    }
}

static GLOBAL_CONFIG: OnceCell<Mutex<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call takes effect; later calls are logged and ignored.
pub fn init_global_config(config: LeiConfig) {
    if GLOBAL_CONFIG.set(Mutex::new(GlobalConfig::new(config))).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, if it has been initialized.
pub fn try_get_global_config() -> Option<GlobalConfig> {
    let mutex = GLOBAL_CONFIG.get()?;
    let guard = mutex.lock().unwrap_or_else(|poisoned| {
        tracing::error!("Global config lock was poisoned, recovering");
        poisoned.into_inner()
    });
    Some(guard.clone())
}

/// Get the global configuration.
///
/// # Panics
///
/// Panics if the global configuration has not been initialized.
pub fn get_global_config() -> GlobalConfig {
    try_get_global_config().expect("Global configuration not initialized")
}
