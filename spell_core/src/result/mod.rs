//! Result system - Assembling and computing damage/healing ranges

mod assembly;
mod calculation;

pub use assembly::{apply_equip_bonus, apply_resistance, assemble, average};
pub use calculation::{compute_base_power_result, compute_preset_result, compute_spell_result};

use serde::{Deserialize, Serialize};

/// Final output range of a spell for one input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ComputationResult {
    /// Contribution from character level
    pub level_base: i64,
    /// Stat contribution to the minimum
    pub min_stat_component: i64,
    /// Stat contribution to the maximum
    pub max_stat_component: i64,
    /// Minimum after all modifiers
    pub min: i64,
    /// Maximum after all modifiers
    pub max: i64,
    /// floor((min + max) / 2)
    pub avg: i64,
}

impl ComputationResult {
    /// Width of the output range
    pub fn spread(&self) -> i64 {
        self.max - self.min
    }

    /// Whether any bound went below zero (possible with large negative equipment bonuses)
    pub fn has_negative(&self) -> bool {
        self.min < 0 || self.max < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread() {
        let result = ComputationResult {
            min: 435,
            max: 748,
            avg: 591,
            ..Default::default()
        };
        assert_eq!(result.spread(), 313);
        assert!(!result.has_negative());
    }
}
