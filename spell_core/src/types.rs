//! Core input types for the spell calculators

use serde::{Deserialize, Serialize};

/// Character attributes that drive spell output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Character level (at least 1 once clamped by the caller)
    pub level: u32,
    /// Magic level, governs magic-scaled spells and runes
    pub magic_level: u32,
    /// Melee skill, governs skill-scaled spells
    pub melee_skill: u32,
}

impl CharacterStats {
    pub fn new(level: u32, magic_level: u32, melee_skill: u32) -> Self {
        CharacterStats {
            level,
            magic_level,
            melee_skill,
        }
    }

    /// Get the stat value a spell scales with
    pub fn scaling_stat(&self, scaling: ScalingStat) -> u32 {
        match scaling {
            ScalingStat::Magic => self.magic_level,
            ScalingStat::Skill => self.melee_skill,
        }
    }
}

impl Default for CharacterStats {
    fn default() -> Self {
        CharacterStats {
            level: 1,
            magic_level: 0,
            melee_skill: 0,
        }
    }
}

/// Calculation mode for the base-power calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcMode {
    /// Attack spells and runes scaling with magic level
    #[default]
    Magic,
    /// Healing spells scaling with magic level
    Healing,
}

impl CalcMode {
    /// Get all calculation modes
    pub fn all() -> &'static [CalcMode] {
        &[CalcMode::Magic, CalcMode::Healing]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalcMode::Magic => "Attack Spells",
            CalcMode::Healing => "Healing Spells",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalcMode::Magic => "Spells & Runes that scale with Magic Level",
            CalcMode::Healing => "Healing spells that scale with Magic Level",
        }
    }

    /// Whether target resistance/weakness affects this mode
    pub fn uses_resistance(&self) -> bool {
        matches!(self, CalcMode::Magic)
    }

    pub fn toggled(&self) -> CalcMode {
        match self {
            CalcMode::Magic => CalcMode::Healing,
            CalcMode::Healing => CalcMode::Magic,
        }
    }
}

/// Preset catalog grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellCategory {
    Runes,
    MageSpells,
    PaladinSpells,
    KnightSpells,
}

impl SpellCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [SpellCategory] {
        &[
            SpellCategory::Runes,
            SpellCategory::MageSpells,
            SpellCategory::PaladinSpells,
            SpellCategory::KnightSpells,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpellCategory::Runes => "Runes",
            SpellCategory::MageSpells => "Mage Spells",
            SpellCategory::PaladinSpells => "Paladin Spells",
            SpellCategory::KnightSpells => "Knight Spells",
        }
    }
}

/// Whether a preset deals damage or heals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellType {
    Damage,
    Healing,
}

/// Stat a preset scales with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStat {
    /// Magic level
    Magic,
    /// Melee skill
    Skill,
}

impl ScalingStat {
    /// Short label used next to the stat value
    pub fn label(&self) -> &'static str {
        match self {
            ScalingStat::Magic => "ML",
            ScalingStat::Skill => "Skill",
        }
    }
}

/// Parameters for the base-power calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellParameters {
    /// Base power from the in-game spell archive (at least 1)
    pub base_power: u32,
    pub calc_mode: CalcMode,
}

impl SpellParameters {
    pub fn new(base_power: u32, calc_mode: CalcMode) -> Self {
        SpellParameters {
            base_power,
            calc_mode,
        }
    }
}

/// Equipment and target modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Percentage bonus from gear, may be negative
    pub equip_bonus_percent: i32,
    /// Target resistance/weakness (100 = neutral). Base-power attack mode only.
    pub target_resistance_percent: u32,
}

impl Modifiers {
    pub fn new(equip_bonus_percent: i32, target_resistance_percent: u32) -> Self {
        Modifiers {
            equip_bonus_percent,
            target_resistance_percent,
        }
    }

    /// Modifiers with only an equipment bonus and a neutral target
    pub fn with_equip_bonus(equip_bonus_percent: i32) -> Self {
        Modifiers {
            equip_bonus_percent,
            ..Default::default()
        }
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers {
            equip_bonus_percent: 0,
            target_resistance_percent: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_stat_selection() {
        let stats = CharacterStats::new(100, 40, 90);
        assert_eq!(stats.scaling_stat(ScalingStat::Magic), 40);
        assert_eq!(stats.scaling_stat(ScalingStat::Skill), 90);
    }

    #[test]
    fn test_only_attack_mode_uses_resistance() {
        assert!(CalcMode::Magic.uses_resistance());
        assert!(!CalcMode::Healing.uses_resistance());
        assert_eq!(CalcMode::Magic.toggled(), CalcMode::Healing);
    }

    #[test]
    fn test_default_modifiers_are_neutral() {
        let mods = Modifiers::default();
        assert_eq!(mods.equip_bonus_percent, 0);
        assert_eq!(mods.target_resistance_percent, 100);
    }

    #[test]
    fn test_enum_serde_names() {
        #[derive(Deserialize)]
        struct Row {
            category: SpellCategory,
            scaling: ScalingStat,
            mode: CalcMode,
        }

        let row: Row = toml::from_str(
            "category = \"mage_spells\"\nscaling = \"skill\"\nmode = \"healing\"",
        )
        .unwrap();
        assert_eq!(row.category, SpellCategory::MageSpells);
        assert_eq!(row.scaling, ScalingStat::Skill);
        assert_eq!(row.mode, CalcMode::Healing);
    }
}
