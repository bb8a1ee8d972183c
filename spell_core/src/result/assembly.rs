//! Result assembly - level bonus + stat components, then modifiers
//!
//! Order:
//! 1. min/max = level_base + stat component
//! 2. Equipment bonus on the sum: floor(x × (1 + equip / 100))
//! 3. Resistance on the equipped sum (attack mode only): floor(x × resist / 100)
//! 4. avg = floor((min + max) / 2)
//!
//! Nothing is clamped. Negative equipment bonuses below -100% give negative output.

use super::ComputationResult;
use crate::scaling::StatComponents;

/// Neutral target resistance
pub const NEUTRAL_RESISTANCE: u32 = 100;

/// Apply an equipment bonus percentage to a value
///
/// A bonus of 0 leaves the value untouched.
pub fn apply_equip_bonus(value: i64, equip_bonus_percent: i32) -> i64 {
    if equip_bonus_percent == 0 {
        return value;
    }
    let factor = 1.0 + f64::from(equip_bonus_percent) / 100.0;
    (value as f64 * factor).floor() as i64
}

/// Apply a target resistance/weakness percentage to a value
///
/// 100 is neutral and leaves the value untouched.
pub fn apply_resistance(value: i64, target_resistance_percent: u32) -> i64 {
    if target_resistance_percent == NEUTRAL_RESISTANCE {
        return value;
    }
    let factor = f64::from(target_resistance_percent) / 100.0;
    (value as f64 * factor).floor() as i64
}

/// Floored midpoint, rounding toward negative infinity for negative sums
///
/// The sum is taken in i128 so saturated bounds cannot overflow. The midpoint
/// lies between the two inputs and always fits back into i64.
pub fn average(min: i64, max: i64) -> i64 {
    let sum = i128::from(min) + i128::from(max);
    sum.div_euclid(2) as i64
}

/// Build a result from its parts
///
/// `target_resistance_percent` is `None` when resistance does not apply
/// (healing mode, or the preset calculator).
pub fn assemble(
    level_base: i64,
    components: StatComponents,
    equip_bonus_percent: i32,
    target_resistance_percent: Option<u32>,
) -> ComputationResult {
    let mut min = level_base.saturating_add(components.min);
    let mut max = level_base.saturating_add(components.max);

    min = apply_equip_bonus(min, equip_bonus_percent);
    max = apply_equip_bonus(max, equip_bonus_percent);

    if let Some(resistance) = target_resistance_percent {
        min = apply_resistance(min, resistance);
        max = apply_resistance(max, resistance);
    }

    ComputationResult {
        level_base,
        min_stat_component: components.min,
        max_stat_component: components.max,
        min,
        max,
        avg: average(min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equip_bonus() {
        assert_eq!(apply_equip_bonus(435, 0), 435);
        // 478.50000000000006
        assert_eq!(apply_equip_bonus(435, 10), 478);
        assert_eq!(apply_equip_bonus(748, 10), 822);
        assert_eq!(apply_equip_bonus(100, -25), 75);
    }

    #[test]
    fn test_resistance() {
        assert_eq!(apply_resistance(435, 100), 435);
        assert_eq!(apply_resistance(435, 50), 217);
        assert_eq!(apply_resistance(100, 120), 120);
        assert_eq!(apply_resistance(100, 0), 0);
    }

    #[test]
    fn test_average_floors() {
        assert_eq!(average(217, 374), 295);
        assert_eq!(average(10, 10), 10);
        assert_eq!(average(-3, 0), -2);
    }

    #[test]
    fn test_average_of_saturated_bounds() {
        assert_eq!(average(i64::MAX, i64::MAX), i64::MAX);
        assert_eq!(average(i64::MIN, i64::MIN), i64::MIN);
        assert_eq!(average(i64::MIN, i64::MAX), -1);
        assert_eq!(average(i64::MAX - 1, i64::MAX), i64::MAX - 1);
    }

    #[test]
    fn test_equip_applies_to_sum_not_components() {
        // (5 + 5) × 1.5 = 15, whereas per-part flooring would give 7 + 7 = 14
        let result = assemble(5, StatComponents { min: 5, max: 5 }, 50, None);
        assert_eq!(result.min, 15);
        assert_eq!(result.max, 15);
    }

    #[test]
    fn test_resistance_after_equip() {
        // (100 × 1.1) = 110, then × 0.5 = 55
        let result = assemble(0, StatComponents { min: 100, max: 100 }, 10, Some(50));
        assert_eq!(result.min, 55);
        assert_eq!(result.level_base, 0);
        assert_eq!(result.min_stat_component, 100);
    }

    #[test]
    fn test_large_negative_equip_goes_negative() {
        // Not clamped: 100 × (1 - 1.5) = -50
        let result = assemble(20, StatComponents { min: 80, max: 80 }, -150, None);
        assert_eq!(result.min, -50);
        assert_eq!(result.avg, -50);
        assert!(result.has_negative());
    }
}
