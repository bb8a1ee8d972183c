//! Preset catalog - Named spells and runes with fixed scaling constants

mod definition;

pub use definition::SpellDefinition;

use crate::types::SpellCategory;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Catalog validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Spell catalog must contain at least one spell")]
    Empty,
    #[error("Duplicate spell name: {0}")]
    DuplicateName(String),
    #[error("Spell '{name}' has min_mult {min_mult} above max_mult {max_mult}")]
    InvertedMultipliers {
        name: String,
        min_mult: f64,
        max_mult: f64,
    },
    #[error("Spell '{name}' has min_offset {min_offset} above max_offset {max_offset}")]
    InvertedOffsets {
        name: String,
        min_offset: i64,
        max_offset: i64,
    },
    #[error("Spell '{0}' has a non-finite multiplier")]
    NonFiniteMultiplier(String),
}

/// Ordered, immutable set of preset spells
///
/// Always holds at least one spell, so name lookups can fall back to the
/// first entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellCatalog {
    spells: Vec<SpellDefinition>,
}

impl SpellCatalog {
    /// Build a catalog, checking names are unique and constants are ordered
    pub fn new(spells: Vec<SpellDefinition>) -> Result<Self, CatalogError> {
        if spells.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for spell in &spells {
            if !seen.insert(spell.name.as_str()) {
                return Err(CatalogError::DuplicateName(spell.name.clone()));
            }
            spell.validate()?;
        }

        Ok(SpellCatalog { spells })
    }

    /// Single-entry catalog used when the bundled presets cannot be read
    pub(crate) fn fallback() -> Self {
        SpellCatalog {
            spells: vec![SpellDefinition::sudden_death_rune()],
        }
    }

    /// Look up a spell by exact name
    pub fn get(&self, name: &str) -> Option<&SpellDefinition> {
        self.spells.iter().find(|spell| spell.name == name)
    }

    /// Look up a spell by name, falling back to the first entry on a miss
    pub fn resolve(&self, name: &str) -> &SpellDefinition {
        match self.get(name) {
            Some(spell) => spell,
            None => {
                debug!(requested = name, fallback = %self.first().name, "unknown spell, using first preset");
                self.first()
            }
        }
    }

    /// First spell in catalog order
    pub fn first(&self) -> &SpellDefinition {
        &self.spells[0]
    }

    /// Position of a spell in catalog order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.spells.iter().position(|spell| spell.name == name)
    }

    /// Spells of one category, in catalog order
    pub fn by_category(&self, category: SpellCategory) -> impl Iterator<Item = &SpellDefinition> {
        self.spells
            .iter()
            .filter(move |spell| spell.category == category)
    }

    /// Categories that have at least one spell, in display order
    pub fn categories(&self) -> Vec<SpellCategory> {
        SpellCategory::all()
            .iter()
            .copied()
            .filter(|category| self.by_category(*category).next().is_some())
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spells.iter().map(|spell| spell.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpellDefinition> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpellCatalog {
    type Item = &'a SpellDefinition;
    type IntoIter = std::slice::Iter<'a, SpellDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.spells.iter()
    }
}
