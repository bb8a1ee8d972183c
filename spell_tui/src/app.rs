//! Application state

use crate::input::{FieldRules, NumericField};
use spell_core::{
    compute_base_power_result, compute_preset_result, CalcMode, CalculatorDefaults,
    CharacterStats, ComputationResult, Modifiers, ScalingConstants, SpellCatalog, SpellCategory,
    SpellDefinition, SpellParameters,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    BasePower,
    Presets,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::BasePower, Tab::Presets, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::BasePower => "Base Power",
            Tab::Presets => "Presets",
            Tab::Help => "Help",
        }
    }
}

/// Inputs for the base-power calculator
#[derive(Debug, Clone)]
pub struct BasePowerForm {
    pub level: NumericField,
    pub magic_level: NumericField,
    pub base_power: NumericField,
    pub equip_bonus: NumericField,
    pub target_resistance: NumericField,
    pub calc_mode: CalcMode,
    pub focus: usize,
}

impl BasePowerForm {
    fn from_defaults(defaults: &CalculatorDefaults) -> Self {
        BasePowerForm {
            level: NumericField::new(
                "Level",
                defaults.character.level.into(),
                FieldRules::AT_LEAST_ONE,
            ),
            magic_level: NumericField::new(
                "Magic Level",
                defaults.character.magic_level.into(),
                FieldRules::NON_NEGATIVE,
            ),
            base_power: NumericField::new(
                "Base Power",
                defaults.base_power.base_power.into(),
                FieldRules::AT_LEAST_ONE,
            ),
            equip_bonus: NumericField::new(
                "Equip Bonus %",
                defaults.modifiers.equip_bonus_percent.into(),
                FieldRules::SIGNED_PERCENT,
            ),
            target_resistance: NumericField::new(
                "Target Resist %",
                defaults.modifiers.target_resistance_percent.into(),
                FieldRules::RESISTANCE_PERCENT,
            ),
            calc_mode: defaults.base_power.calc_mode,
            focus: 0,
        }
    }

    /// Editable fields in display order. Resistance is hidden in healing mode.
    pub fn fields(&self) -> Vec<&NumericField> {
        let mut fields = vec![
            &self.level,
            &self.magic_level,
            &self.base_power,
            &self.equip_bonus,
        ];
        if self.calc_mode.uses_resistance() {
            fields.push(&self.target_resistance);
        }
        fields
    }

    fn focused_mut(&mut self) -> &mut NumericField {
        match self.focus {
            0 => &mut self.level,
            1 => &mut self.magic_level,
            2 => &mut self.base_power,
            3 => &mut self.equip_bonus,
            _ => &mut self.target_resistance,
        }
    }

    fn row_count(&self) -> usize {
        self.fields().len()
    }

    pub fn stats(&self) -> CharacterStats {
        CharacterStats::new(self.level.value_u32(), self.magic_level.value_u32(), 0)
    }

    pub fn params(&self) -> SpellParameters {
        SpellParameters::new(self.base_power.value_u32(), self.calc_mode)
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::new(
            self.equip_bonus.value_i32(),
            self.target_resistance.value_u32(),
        )
    }

    /// Constants derived from the current base power, for display
    pub fn constants(&self) -> ScalingConstants {
        ScalingConstants::from_base_power(self.base_power.value_u32())
    }
}

/// Inputs for the preset calculator
#[derive(Debug, Clone)]
pub struct PresetForm {
    pub level: NumericField,
    pub magic_level: NumericField,
    pub melee_skill: NumericField,
    pub equip_bonus: NumericField,
    pub category: SpellCategory,
    /// Name of the selected preset
    pub spell: String,
    /// Row 0 is the spell selector, rows 1.. are the numeric fields
    pub focus: usize,
}

impl PresetForm {
    fn from_defaults(defaults: &CalculatorDefaults, catalog: &SpellCatalog) -> Self {
        let selected = catalog.resolve(&defaults.preset.spell);
        PresetForm {
            level: NumericField::new(
                "Level",
                defaults.character.level.into(),
                FieldRules::AT_LEAST_ONE,
            ),
            magic_level: NumericField::new(
                "Magic Level",
                defaults.character.magic_level.into(),
                FieldRules::NON_NEGATIVE,
            ),
            melee_skill: NumericField::new(
                "Melee Skill",
                defaults.character.melee_skill.into(),
                FieldRules::NON_NEGATIVE,
            ),
            equip_bonus: NumericField::new(
                "Equip Bonus %",
                defaults.modifiers.equip_bonus_percent.into(),
                FieldRules::SIGNED_PERCENT,
            ),
            category: selected.category,
            spell: selected.name.clone(),
            focus: 0,
        }
    }

    pub fn fields(&self) -> [&NumericField; 4] {
        [
            &self.level,
            &self.magic_level,
            &self.melee_skill,
            &self.equip_bonus,
        ]
    }

    fn focused_mut(&mut self) -> Option<&mut NumericField> {
        match self.focus {
            0 => None,
            1 => Some(&mut self.level),
            2 => Some(&mut self.magic_level),
            3 => Some(&mut self.melee_skill),
            _ => Some(&mut self.equip_bonus),
        }
    }

    fn row_count(&self) -> usize {
        self.fields().len() + 1
    }

    pub fn stats(&self) -> CharacterStats {
        CharacterStats::new(
            self.level.value_u32(),
            self.magic_level.value_u32(),
            self.melee_skill.value_u32(),
        )
    }
}

pub struct App {
    pub current_tab: Tab,
    pub catalog: SpellCatalog,
    pub defaults: CalculatorDefaults,
    pub base_power: BasePowerForm,
    pub presets: PresetForm,
    pub base_power_result: ComputationResult,
    pub preset_result: ComputationResult,
    /// Calculator tab that `?` returns to when leaving Help
    pub last_calculator_tab: Tab,
}

impl App {
    pub fn new(catalog: SpellCatalog, defaults: CalculatorDefaults) -> Self {
        let base_power = BasePowerForm::from_defaults(&defaults);
        let presets = PresetForm::from_defaults(&defaults, &catalog);

        let mut app = App {
            current_tab: Tab::BasePower,
            catalog,
            defaults,
            base_power,
            presets,
            base_power_result: ComputationResult::default(),
            preset_result: ComputationResult::default(),
            last_calculator_tab: Tab::BasePower,
        };
        app.recompute();
        app
    }

    /// Run both calculators against the current inputs
    pub fn recompute(&mut self) {
        self.base_power_result = compute_base_power_result(
            &self.base_power.stats(),
            &self.base_power.params(),
            &self.base_power.modifiers(),
        );
        self.preset_result = compute_preset_result(
            &self.catalog,
            &self.presets.stats(),
            &self.presets.spell,
            self.presets.equip_bonus.value_i32(),
        );
    }

    /// Currently selected preset definition
    pub fn selected_spell(&self) -> &SpellDefinition {
        self.catalog.resolve(&self.presets.spell)
    }

    /// Presets in the selected category
    pub fn category_spells(&self) -> Vec<&SpellDefinition> {
        self.catalog.by_category(self.presets.category).collect()
    }

    fn select_tab(&mut self, tab: Tab) {
        if self.current_tab != Tab::Help {
            self.last_calculator_tab = self.current_tab;
        }
        self.current_tab = tab;
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.select_tab(tabs[(idx + 1) % tabs.len()]);
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let tab = if idx == 0 {
            tabs[tabs.len() - 1]
        } else {
            tabs[idx - 1]
        };
        self.select_tab(tab);
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::BasePower => {
                self.base_power.focus = self.base_power.focus.saturating_sub(1);
            }
            Tab::Presets => {
                self.presets.focus = self.presets.focus.saturating_sub(1);
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::BasePower => {
                let last = self.base_power.row_count() - 1;
                self.base_power.focus = (self.base_power.focus + 1).min(last);
            }
            Tab::Presets => {
                let last = self.presets.row_count() - 1;
                self.presets.focus = (self.presets.focus + 1).min(last);
            }
            Tab::Help => {}
        }
    }

    /// Left/right: step the focused field, or move through presets on the spell row
    pub fn on_step(&mut self, delta: i64) {
        match self.current_tab {
            Tab::BasePower => self.base_power.focused_mut().step(delta),
            Tab::Presets => match self.presets.focused_mut() {
                Some(field) => field.step(delta),
                None => self.cycle_spell(delta.signum()),
            },
            Tab::Help => return,
        }
        self.recompute();
    }

    /// Typed character goes to the focused field
    pub fn on_char(&mut self, c: char) {
        let accepted = match self.current_tab {
            Tab::BasePower => self.base_power.focused_mut().push_char(c),
            Tab::Presets => self
                .presets
                .focused_mut()
                .map(|field| field.push_char(c))
                .unwrap_or(false),
            Tab::Help => false,
        };
        if accepted {
            self.recompute();
        }
    }

    pub fn on_backspace(&mut self) {
        match self.current_tab {
            Tab::BasePower => self.base_power.focused_mut().backspace(),
            Tab::Presets => match self.presets.focused_mut() {
                Some(field) => field.backspace(),
                None => return,
            },
            Tab::Help => return,
        }
        self.recompute();
    }

    /// Switch between attack and healing in the base-power calculator
    pub fn toggle_calc_mode(&mut self) {
        self.base_power.calc_mode = self.base_power.calc_mode.toggled();
        // Resistance row disappears in healing mode
        let last = self.base_power.row_count() - 1;
        self.base_power.focus = self.base_power.focus.min(last);
        debug!(mode = ?self.base_power.calc_mode, "calc mode changed");
        self.recompute();
    }

    /// Move to the next category that has presets and select its first spell
    pub fn next_category(&mut self) {
        let categories = self.catalog.categories();
        let idx = categories
            .iter()
            .position(|c| *c == self.presets.category)
            .map(|i| (i + 1) % categories.len())
            .unwrap_or(0);
        self.presets.category = categories[idx];
        if let Some(first) = self.catalog.by_category(self.presets.category).next() {
            self.presets.spell = first.name.clone();
        }
        self.recompute();
    }

    /// Step through presets within the selected category, wrapping around
    pub fn cycle_spell(&mut self, direction: i64) {
        let names: Vec<String> = self
            .category_spells()
            .iter()
            .map(|spell| spell.name.clone())
            .collect();
        if names.is_empty() {
            return;
        }

        let current = names
            .iter()
            .position(|name| *name == self.presets.spell)
            .unwrap_or(0) as i64;
        let next = (current + direction).rem_euclid(names.len() as i64) as usize;
        self.presets.spell = names[next].clone();
        debug!(spell = %self.presets.spell, "preset selected");
        self.recompute();
    }

    /// Restore every input to the configured defaults
    pub fn reset(&mut self) {
        self.base_power = BasePowerForm::from_defaults(&self.defaults);
        self.presets = PresetForm::from_defaults(&self.defaults, &self.catalog);
        info!("inputs reset to defaults");
        self.recompute();
    }

    /// Jump to Help, or back to the last calculator tab when already there
    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.last_calculator_tab;
        } else {
            self.select_tab(Tab::Help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::default_catalog;

    fn app() -> App {
        App::new(default_catalog(), CalculatorDefaults::default())
    }

    #[test]
    fn test_initial_results() {
        let app = app();
        assert_eq!(app.base_power_result.min, 435);
        assert_eq!(app.base_power_result.max, 748);
        assert_eq!(app.selected_spell().name, "Sudden Death Rune");
        assert_eq!(app.preset_result.min, 515);
        assert_eq!(app.preset_result.max, 798);
    }

    #[test]
    fn test_typing_recomputes() {
        let mut app = app();
        // Focus equip bonus and type 10
        app.on_down();
        app.on_down();
        app.on_down();
        app.on_backspace();
        app.on_char('1');
        app.on_char('0');

        assert_eq!(app.base_power.equip_bonus.value(), 10);
        assert_eq!(app.base_power_result.min, 478);
        assert_eq!(app.base_power_result.max, 822);
    }

    #[test]
    fn test_non_numeric_level_uses_fallback() {
        let mut app = app();
        for _ in 0..3 {
            app.on_backspace();
        }
        assert_eq!(app.base_power.level.text(), "");
        assert_eq!(app.base_power.stats().level, 1);
        // level 1 gives no level bonus
        assert_eq!(app.base_power_result.level_base, 0);
    }

    #[test]
    fn test_healing_mode_hides_resistance() {
        let mut app = app();
        for _ in 0..10 {
            app.on_down();
        }
        assert_eq!(app.base_power.focus, 4);
        app.on_backspace();
        app.on_backspace();
        app.on_backspace();
        app.on_char('5');
        app.on_char('0');
        assert_eq!(app.base_power_result.min, 217);

        app.toggle_calc_mode();
        assert_eq!(app.base_power.focus, 3);
        assert_eq!(app.base_power.fields().len(), 4);
        assert_eq!(app.base_power_result.min, 435);
    }

    #[test]
    fn test_cycle_spell_wraps_within_category() {
        let mut app = app();
        app.current_tab = Tab::Presets;
        let runes = app.category_spells().len();
        for _ in 0..runes {
            app.on_step(1);
        }
        assert_eq!(app.selected_spell().name, "Sudden Death Rune");

        app.on_step(-1);
        assert_eq!(app.selected_spell().category, SpellCategory::Runes);
        assert_ne!(app.selected_spell().name, "Sudden Death Rune");
    }

    #[test]
    fn test_next_category_selects_first_spell() {
        let mut app = app();
        app.current_tab = Tab::Presets;
        app.next_category();
        assert_eq!(app.presets.category, SpellCategory::MageSpells);
        assert_eq!(app.selected_spell().category, SpellCategory::MageSpells);

        for _ in 0..3 {
            app.next_category();
        }
        assert_eq!(app.presets.category, SpellCategory::Runes);
    }

    #[test]
    fn test_unknown_default_spell_falls_back() {
        let mut defaults = CalculatorDefaults::default();
        defaults.preset.spell = "Nonexistent".to_string();
        let app = App::new(default_catalog(), defaults);
        assert_eq!(app.selected_spell().name, app.catalog.first().name);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app();
        app.on_step(100);
        assert_ne!(app.base_power.level.value(), 250);
        app.reset();
        assert_eq!(app.base_power.level.value(), 250);
        assert_eq!(app.base_power_result.min, 435);
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = app();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Presets);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
    }

    #[test]
    fn test_help_toggles_back_to_previous_tab() {
        let mut app = app();
        app.next_tab();
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Help);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Presets);

        // Reaching Help by tabbing still returns to the tab left behind
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Presets);
    }
}
