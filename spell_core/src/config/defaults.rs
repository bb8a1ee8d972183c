//! Calculator defaults configuration
//!
//! Initial input snapshot for both calculators. Every field has a default so
//! partial files are accepted.

use super::ConfigError;
use crate::types::{CalcMode, CharacterStats, Modifiers, SpellParameters};
use serde::{Deserialize, Serialize};

/// Starting inputs for the calculators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    #[serde(default)]
    pub character: CharacterDefaults,
    #[serde(default)]
    pub base_power: BasePowerDefaults,
    #[serde(default)]
    pub modifiers: ModifierDefaults,
    #[serde(default)]
    pub preset: PresetDefaults,
}

impl CalculatorDefaults {
    /// Check values the calculators require (level and base power at least 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.character.level < 1 {
            return Err(ConfigError::ValidationError(
                "character.level must be at least 1".to_string(),
            ));
        }
        if self.base_power.base_power < 1 {
            return Err(ConfigError::ValidationError(
                "base_power.base_power must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn stats(&self) -> CharacterStats {
        CharacterStats::new(
            self.character.level,
            self.character.magic_level,
            self.character.melee_skill,
        )
    }

    pub fn spell_parameters(&self) -> SpellParameters {
        SpellParameters::new(self.base_power.base_power, self.base_power.calc_mode)
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::new(
            self.modifiers.equip_bonus_percent,
            self.modifiers.target_resistance_percent,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefaults {
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_magic_level")]
    pub magic_level: u32,
    #[serde(default = "default_melee_skill")]
    pub melee_skill: u32,
}

impl Default for CharacterDefaults {
    fn default() -> Self {
        CharacterDefaults {
            level: 250,
            magic_level: 95,
            melee_skill: 80,
        }
    }
}

fn default_level() -> u32 {
    250
}
fn default_magic_level() -> u32 {
    95
}
fn default_melee_skill() -> u32 {
    80
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePowerDefaults {
    /// Base power from the spell archive
    #[serde(default = "default_base_power")]
    pub base_power: u32,
    #[serde(default)]
    pub calc_mode: CalcMode,
}

impl Default for BasePowerDefaults {
    fn default() -> Self {
        BasePowerDefaults {
            base_power: 140,
            calc_mode: CalcMode::Magic,
        }
    }
}

fn default_base_power() -> u32 {
    140
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierDefaults {
    #[serde(default)]
    pub equip_bonus_percent: i32,
    /// 100 = neutral target
    #[serde(default = "default_target_resistance")]
    pub target_resistance_percent: u32,
}

impl Default for ModifierDefaults {
    fn default() -> Self {
        ModifierDefaults {
            equip_bonus_percent: 0,
            target_resistance_percent: 100,
        }
    }
}

fn default_target_resistance() -> u32 {
    100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDefaults {
    /// Preset selected on start; unknown names fall back to the first preset
    #[serde(default = "default_spell")]
    pub spell: String,
}

impl Default for PresetDefaults {
    fn default() -> Self {
        PresetDefaults {
            spell: default_spell(),
        }
    }
}

fn default_spell() -> String {
    "Sudden Death Rune".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_toml;

    #[test]
    fn test_default_values() {
        let defaults = CalculatorDefaults::default();
        assert_eq!(defaults.stats(), CharacterStats::new(250, 95, 80));
        assert_eq!(defaults.spell_parameters(), SpellParameters::new(140, CalcMode::Magic));
        assert_eq!(defaults.modifiers(), Modifiers::default());
        assert_eq!(defaults.preset.spell, "Sudden Death Rune");
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_parse_full_defaults() {
        let toml = r#"
[character]
level = 600
magic_level = 110
melee_skill = 120

[base_power]
base_power = 200
calc_mode = "healing"

[modifiers]
equip_bonus_percent = -5
target_resistance_percent = 80

[preset]
spell = "Avalanche Rune"
"#;

        let defaults: CalculatorDefaults = parse_toml(toml).unwrap();
        assert_eq!(defaults.character.level, 600);
        assert_eq!(defaults.base_power.calc_mode, CalcMode::Healing);
        assert_eq!(defaults.modifiers.equip_bonus_percent, -5);
        assert_eq!(defaults.modifiers.target_resistance_percent, 80);
        assert_eq!(defaults.preset.spell, "Avalanche Rune");
    }

    #[test]
    fn test_partial_defaults_fill_in() {
        let toml = r#"
[character]
level = 42
"#;

        let defaults: CalculatorDefaults = parse_toml(toml).unwrap();
        assert_eq!(defaults.character.level, 42);
        assert_eq!(defaults.character.magic_level, 95);
        assert_eq!(defaults.base_power.base_power, 140);
        assert_eq!(defaults.modifiers.target_resistance_percent, 100);
    }

    #[test]
    fn test_zero_level_fails_validation() {
        let defaults: CalculatorDefaults = parse_toml("[character]\nlevel = 0").unwrap();
        assert!(matches!(
            defaults.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
