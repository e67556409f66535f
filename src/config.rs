//! Settings for list views.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Page sizes a user may pick, and the size used before they pick one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_sizes: vec![3, 5, 10, 20, 30, 40, 50, 100, 500],
            default_page_size: 5,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_sizes.is_empty() {
            return Err(ConfigError::Invalid("page_sizes must not be empty".into()));
        }
        if self.page_sizes.contains(&0) {
            return Err(ConfigError::Invalid("page sizes must be at least 1".into()));
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} is not one of page_sizes",
                self.default_page_size
            )));
        }
        Ok(())
    }
}
