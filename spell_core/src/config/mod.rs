//! Configuration loading from TOML files

mod defaults;
mod spells;

pub use defaults::{
    BasePowerDefaults, CalculatorDefaults, CharacterDefaults, ModifierDefaults, PresetDefaults,
};
pub use spells::{default_catalog, load_catalog, parse_catalog};

use crate::catalog::CatalogError;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Invalid spell catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    debug!(path = %path.display(), "loading config file");
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<CalculatorDefaults, _> =
            load_toml(Path::new("/definitely/not/here/defaults.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result: Result<CalculatorDefaults, _> = parse_toml("[character\nlevel = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
