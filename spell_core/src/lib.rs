//! spell_core - Damage and healing range formulas for spells and runes
//!
//! This library provides:
//! - Level bonus curves: diminishing (base-power calculator) and flat (preset calculator)
//! - ScalingConstants: linear stat scaling, derived from base power or read from presets
//! - SpellCatalog: immutable preset table, loaded once and passed by reference
//! - ComputationResult: min/max/avg range after equipment and resistance modifiers
//!
//! Every calculation is a pure function of its inputs.

pub mod catalog;
pub mod config;
pub mod level;
pub mod prelude;
pub mod result;
pub mod scaling;
pub mod types;

// Re-export core types for convenience
pub use catalog::{CatalogError, SpellCatalog, SpellDefinition};
pub use config::{default_catalog, CalculatorDefaults, ConfigError};
pub use level::{level_bonus_diminishing, level_bonus_flat};
pub use result::{
    compute_base_power_result, compute_preset_result, compute_spell_result, ComputationResult,
};
pub use scaling::{ScalingConstants, StatComponents};
pub use types::{
    CalcMode, CharacterStats, Modifiers, ScalingStat, SpellCategory, SpellParameters, SpellType,
};
