//! SpellDefinition - One preset entry

use super::CatalogError;
use crate::scaling::ScalingConstants;
use crate::types::{ScalingStat, SpellCategory, SpellType};
use serde::{Deserialize, Serialize};

/// A named spell or rune with fixed scaling constants
/// Loaded from TOML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellDefinition {
    /// Unique display name, also the lookup key
    pub name: String,
    pub category: SpellCategory,
    /// Damage or healing
    #[serde(rename = "type")]
    pub spell_type: SpellType,
    /// Stat the constants are applied to
    pub scaling: ScalingStat,
    pub constants: ScalingConstants,
}

impl SpellDefinition {
    pub fn new(
        name: impl Into<String>,
        category: SpellCategory,
        spell_type: SpellType,
        scaling: ScalingStat,
        constants: ScalingConstants,
    ) -> Self {
        SpellDefinition {
            name: name.into(),
            category,
            spell_type,
            scaling,
            constants,
        }
    }

    /// Fallback preset used when the bundled catalog cannot be read
    pub fn sudden_death_rune() -> Self {
        SpellDefinition::new(
            "Sudden Death Rune",
            SpellCategory::Runes,
            SpellType::Damage,
            ScalingStat::Magic,
            ScalingConstants::new(4.605, 28, 7.395, 46),
        )
    }

    pub fn is_healing(&self) -> bool {
        self.spell_type == SpellType::Healing
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let c = &self.constants;
        if !c.min_mult.is_finite() || !c.max_mult.is_finite() {
            return Err(CatalogError::NonFiniteMultiplier(self.name.clone()));
        }
        if c.min_mult > c.max_mult {
            return Err(CatalogError::InvertedMultipliers {
                name: self.name.clone(),
                min_mult: c.min_mult,
                max_mult: c.max_mult,
            });
        }
        if c.min_offset > c.max_offset {
            return Err(CatalogError::InvertedOffsets {
                name: self.name.clone(),
                min_offset: c.min_offset,
                max_offset: c.max_offset,
            });
        }
        Ok(())
    }
}
