//! ScalingConstants - The (min_mult, min_offset, max_mult, max_offset) tuple

use serde::{Deserialize, Serialize};

/// Linear scaling of a spell against one stat
///
/// Output before level bonus and modifiers:
/// - min = floor(stat × min_mult + min_offset)
/// - max = floor(stat × max_mult + max_offset)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingConstants {
    pub min_mult: f64,
    pub min_offset: i64,
    pub max_mult: f64,
    pub max_offset: i64,
}

/// Stat contribution to the min and max output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatComponents {
    pub min: i64,
    pub max: i64,
}

impl ScalingConstants {
    pub fn new(min_mult: f64, min_offset: i64, max_mult: f64, max_offset: i64) -> Self {
        ScalingConstants {
            min_mult,
            min_offset,
            max_mult,
            max_offset,
        }
    }

    /// Apply the constants to a stat value
    pub fn stat_components(&self, stat: u32) -> StatComponents {
        let stat = f64::from(stat);
        StatComponents {
            min: (stat * self.min_mult + self.min_offset as f64).floor() as i64,
            max: (stat * self.max_mult + self.max_offset as f64).floor() as i64,
        }
    }

    /// Check the min side never exceeds the max side
    pub fn is_ordered(&self) -> bool {
        self.min_mult <= self.max_mult && self.min_offset <= self.max_offset
    }
}
