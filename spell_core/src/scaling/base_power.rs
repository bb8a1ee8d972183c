//! Base power derivation
//!
//! Turns a spell's base power (from the in-game spell archive) into scaling
//! constants. Steps, in order:
//! 1. max_mult = sqrt(base_power) × 0.59
//! 2. min_mult = max_mult × 0.55
//! 3. max_offset = floor(base_power × 0.25)
//! 4. min_offset = floor(max_offset × 0.6)
//!
//! Multipliers are never floored. Reordering the steps changes results.

use super::ScalingConstants;

/// Factor applied to sqrt(base_power) for the max multiplier
pub const BASE_POWER_MAX_MULT_FACTOR: f64 = 0.59;

/// Factor applied to the max multiplier for the min multiplier
pub const BASE_POWER_MIN_MULT_FACTOR: f64 = 0.55;

/// Factor applied to base power for the max offset
pub const BASE_POWER_MAX_OFFSET_FACTOR: f64 = 0.25;

/// Factor applied to the max offset for the min offset
pub const BASE_POWER_MIN_OFFSET_FACTOR: f64 = 0.6;

impl ScalingConstants {
    /// Derive scaling constants from a base power value
    pub fn from_base_power(base_power: u32) -> Self {
        let base_power = f64::from(base_power);
        let sqrt_bp = base_power.sqrt();

        let max_mult = sqrt_bp * BASE_POWER_MAX_MULT_FACTOR;
        let min_mult = max_mult * BASE_POWER_MIN_MULT_FACTOR;
        let max_offset = (base_power * BASE_POWER_MAX_OFFSET_FACTOR).floor();
        let min_offset = (max_offset * BASE_POWER_MIN_OFFSET_FACTOR).floor();

        ScalingConstants {
            min_mult,
            min_offset: min_offset as i64,
            max_mult,
            max_offset: max_offset as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_power_140() {
        let constants = ScalingConstants::from_base_power(140);
        assert!((constants.max_mult - 6.980974144057547).abs() < 1e-12);
        assert!((constants.min_mult - 3.8395357792316513).abs() < 1e-12);
        assert_eq!(constants.max_offset, 35);
        assert_eq!(constants.min_offset, 21);
    }

    #[test]
    fn test_base_power_140_components_at_ml_95() {
        let parts = ScalingConstants::from_base_power(140).stat_components(95);
        // 95 × 3.83953... + 21 = 385.75...
        assert_eq!(parts.min, 385);
        // 95 × 6.98097... + 35 = 698.19...
        assert_eq!(parts.max, 698);
    }

    #[test]
    fn test_offsets_floor_in_sequence() {
        // max_offset = floor(2.5) = 2, min_offset = floor(1.2) = 1
        let constants = ScalingConstants::from_base_power(10);
        assert_eq!(constants.max_offset, 2);
        assert_eq!(constants.min_offset, 1);
    }

    #[test]
    fn test_base_power_one() {
        let constants = ScalingConstants::from_base_power(1);
        assert!((constants.max_mult - 0.59).abs() < f64::EPSILON);
        assert_eq!(constants.max_offset, 0);
        assert_eq!(constants.min_offset, 0);
        assert!(constants.is_ordered());
    }
}
