//! Non-interactive JSON report of both calculators

use crate::app::App;
use serde::Serialize;
use spell_core::{
    CharacterStats, ComputationResult, Modifiers, ScalingConstants, SpellDefinition,
    SpellParameters,
};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub base_power: BasePowerReport,
    pub preset: PresetReport<'a>,
}

#[derive(Debug, Serialize)]
pub struct BasePowerReport {
    pub stats: CharacterStats,
    pub params: SpellParameters,
    pub modifiers: Modifiers,
    /// Constants derived from base power
    pub constants: ScalingConstants,
    pub result: ComputationResult,
}

#[derive(Debug, Serialize)]
pub struct PresetReport<'a> {
    pub stats: CharacterStats,
    pub spell: &'a SpellDefinition,
    pub equip_bonus_percent: i32,
    pub result: ComputationResult,
}

impl<'a> Report<'a> {
    /// Snapshot the app's current inputs and results
    pub fn from_app(app: &'a App) -> Self {
        Report {
            base_power: BasePowerReport {
                stats: app.base_power.stats(),
                params: app.base_power.params(),
                modifiers: app.base_power.modifiers(),
                constants: app.base_power.constants(),
                result: app.base_power_result,
            },
            preset: PresetReport {
                stats: app.presets.stats(),
                spell: app.selected_spell(),
                equip_bonus_percent: app.presets.equip_bonus.value_i32(),
                result: app.preset_result,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::{default_catalog, CalculatorDefaults};

    #[test]
    fn test_report_json() {
        let app = App::new(default_catalog(), CalculatorDefaults::default());
        let json = Report::from_app(&app).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["base_power"]["result"]["min"], 435);
        assert_eq!(value["base_power"]["result"]["avg"], 591);
        assert_eq!(value["base_power"]["params"]["calc_mode"], "magic");
        assert_eq!(value["base_power"]["constants"]["max_offset"], 35);
        assert_eq!(value["preset"]["spell"]["name"], "Sudden Death Rune");
        assert_eq!(value["preset"]["spell"]["type"], "damage");
        assert_eq!(value["preset"]["result"]["max"], 798);
    }
}
