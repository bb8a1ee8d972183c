//! Spell catalog loading

use super::ConfigError;
use crate::catalog::{SpellCatalog, SpellDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Container for preset definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellsConfig {
    #[serde(rename = "spells")]
    pub spells: Vec<SpellDefinition>,
}

/// Load a spell catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<SpellCatalog, ConfigError> {
    let config: SpellsConfig = super::load_toml(path)?;
    let catalog = SpellCatalog::new(config.spells)?;
    debug!(path = %path.display(), spells = catalog.len(), "loaded spell catalog");
    Ok(catalog)
}

/// Load a spell catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<SpellCatalog, ConfigError> {
    let config: SpellsConfig = super::parse_toml(content)?;
    Ok(SpellCatalog::new(config.spells)?)
}

/// Get the bundled spell catalog
pub fn default_catalog() -> SpellCatalog {
    let toml = include_str!("../../config/spells.toml");
    parse_catalog(toml).unwrap_or_else(|err| {
        warn!(error = %err, "bundled spell catalog is invalid, using single fallback preset");
        SpellCatalog::fallback()
    })
}
