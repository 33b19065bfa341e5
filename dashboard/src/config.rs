use log::info;
use serde::Deserialize;
use thiserror::Error;

mod dashboard_config;
pub use dashboard_config::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {message}")]
    FileError { message: String },
    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

/// Thin wrapper over a layered `config::Config`.
pub struct Config {
    settings: config::Config,
}

impl Config {
    fn load(filepath: &str, format: config::FileFormat) -> Result<Self, ConfigError> {
        config::builder::ConfigBuilder::<config::builder::DefaultState>::default()
            .add_source(config::File::with_name(filepath).format(format))
            .build()
            .map(|settings| {
                info!("settings loaded from {}", filepath);
                Config { settings }
            })
            .map_err(|e| ConfigError::FileError {
                message: format!("{}: {}", filepath, e),
            })
    }

    pub fn from_json(filepath: &str) -> Result<Self, ConfigError> {
        Self::load(filepath, config::FileFormat::Json)
    }

    pub fn from_yaml(filepath: &str) -> Result<Self, ConfigError> {
        Self::load(filepath, config::FileFormat::Yaml)
    }

    pub fn from_toml(filepath: &str) -> Result<Self, ConfigError> {
        Self::load(filepath, config::FileFormat::Toml)
    }

    /// Picks the format from the file extension, toml otherwise.
    pub fn from_path(filepath: &str) -> Result<Self, ConfigError> {
        match filepath.rsplit('.').next() {
            Some("json") => Self::from_json(filepath),
            Some("yaml") | Some("yml") => Self::from_yaml(filepath),
            _ => Self::from_toml(filepath),
        }
    }

    /// Empty configuration: every tunable falls back to its default.
    pub fn empty() -> Self {
        Config {
            settings: config::Config::default(),
        }
    }

    pub fn get<'de, T: Deserialize<'de>>(&self, key: &str) -> Result<T, ConfigError> {
        self.settings
            .get::<T>(key)
            .map_err(|e| ConfigError::ParseError {
                message: format!("{}: {}", key, e),
            })
    }

    /// `None` when the key is absent, an error when it is present but malformed.
    pub fn get_opt<'de, T: Deserialize<'de>>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.settings.get::<T>(key) {
            Ok(v) => Ok(Some(v)),
            Err(config::ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(ConfigError::ParseError {
                message: format!("{}: {}", key, e),
            }),
        }
    }
}

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod dashboard_config_test;
