//! Prelude module for convenient imports
//!
//! ```rust
//! use spell_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    CalcMode, CharacterStats, Modifiers, ScalingStat, SpellCategory, SpellParameters, SpellType,
};

// Formulas
pub use crate::level::{level_bonus_diminishing, level_bonus_flat};
pub use crate::scaling::ScalingConstants;

// Results
pub use crate::result::{
    compute_base_power_result, compute_preset_result, compute_spell_result, ComputationResult,
};

// Catalog
pub use crate::catalog::{SpellCatalog, SpellDefinition};

// Config
pub use crate::config::{default_catalog, CalculatorDefaults};
