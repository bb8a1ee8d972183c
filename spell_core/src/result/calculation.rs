//! Result calculation - turning stats + spell + modifiers into a ComputationResult

use super::{assemble, ComputationResult};
use crate::catalog::{SpellCatalog, SpellDefinition};
use crate::level::{level_bonus_diminishing, level_bonus_flat};
use crate::scaling::ScalingConstants;
use crate::types::{CharacterStats, Modifiers, SpellParameters};
use tracing::trace;

/// Calculate the range for the base-power calculator
///
/// Uses the diminishing level bonus and constants derived from base power.
/// Resistance is applied only in attack (magic) mode.
pub fn compute_base_power_result(
    stats: &CharacterStats,
    params: &SpellParameters,
    modifiers: &Modifiers,
) -> ComputationResult {
    let level_base = i64::from(level_bonus_diminishing(stats.level));
    let constants = ScalingConstants::from_base_power(params.base_power);
    let components = constants.stat_components(stats.magic_level);

    let resistance = params
        .calc_mode
        .uses_resistance()
        .then_some(modifiers.target_resistance_percent);

    let result = assemble(
        level_base,
        components,
        modifiers.equip_bonus_percent,
        resistance,
    );

    trace!(
        level = stats.level,
        magic_level = stats.magic_level,
        base_power = params.base_power,
        calc_mode = ?params.calc_mode,
        min = result.min,
        max = result.max,
        "computed base power result"
    );

    result
}

/// Calculate the range for a preset spell definition
///
/// Uses the flat level bonus and the spell's own constants against its
/// governing stat. Resistance never applies here.
pub fn compute_spell_result(
    stats: &CharacterStats,
    spell: &SpellDefinition,
    equip_bonus_percent: i32,
) -> ComputationResult {
    let level_base = i64::from(level_bonus_flat(stats.level));
    let stat = stats.scaling_stat(spell.scaling);
    let components = spell.constants.stat_components(stat);

    let result = assemble(level_base, components, equip_bonus_percent, None);

    trace!(
        spell = %spell.name,
        level = stats.level,
        stat,
        min = result.min,
        max = result.max,
        "computed preset result"
    );

    result
}

/// Calculate the range for a preset looked up by name
///
/// Unknown names fall back to the catalog's first entry.
pub fn compute_preset_result(
    catalog: &SpellCatalog,
    stats: &CharacterStats,
    spell_name: &str,
    equip_bonus_percent: i32,
) -> ComputationResult {
    compute_spell_result(stats, catalog.resolve(spell_name), equip_bonus_percent)
}
