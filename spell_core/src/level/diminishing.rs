//! Diminishing-returns level bonus
//!
//! Levels are consumed in segments of growing size and divisor:
//! - 1-500: +1 per 5 levels
//! - 501-1100: +1 per 6 levels
//! - 1101-1800: +1 per 7 levels
//! - ... (+100 range and +1 divisor each step)
//!
//! Each segment contributes `floor(levels_in_segment / divisor)`, so the
//! flooring happens per segment and not over the whole level.

use super::constants::{
    FIRST_SEGMENT_DIVISOR, FIRST_SEGMENT_RANGE, SEGMENT_DIVISOR_STEP, SEGMENT_RANGE_STEP,
};
use serde::{Deserialize, Serialize};

/// One consumed segment of the diminishing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSegment {
    /// Levels taken from this segment
    pub levels: u32,
    /// Segment divisor
    pub divisor: u32,
    /// Bonus contributed (`levels / divisor`, floored)
    pub bonus: u32,
}

/// Calculate the level bonus with diminishing returns
///
/// Returns 0 for level 0. Segment ranges grow every step, so the loop runs
/// O(sqrt(level)) times.
pub fn level_bonus_diminishing(level: u32) -> u32 {
    segments(level).map(|segment| segment.bonus).sum()
}

/// Iterate the segments consumed by `level`
pub fn segments(level: u32) -> impl Iterator<Item = LevelSegment> {
    let mut remaining = level;
    let mut range = FIRST_SEGMENT_RANGE;
    let mut divisor = FIRST_SEGMENT_DIVISOR;

    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }

        let levels = remaining.min(range);
        let segment = LevelSegment {
            levels,
            divisor,
            bonus: levels / divisor,
        };

        remaining -= levels;
        range = range.saturating_add(SEGMENT_RANGE_STEP);
        divisor = divisor.saturating_add(SEGMENT_DIVISOR_STEP);

        Some(segment)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero() {
        assert_eq!(level_bonus_diminishing(0), 0);
        assert_eq!(segments(0).count(), 0);
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(level_bonus_diminishing(4), 0);
        assert_eq!(level_bonus_diminishing(5), 1);
        assert_eq!(level_bonus_diminishing(250), 50);
        assert_eq!(level_bonus_diminishing(500), 100);
    }

    #[test]
    fn test_second_segment() {
        // 100 + floor(100 / 6)
        assert_eq!(level_bonus_diminishing(600), 116);
        // 100 + floor(600 / 6)
        assert_eq!(level_bonus_diminishing(1100), 200);
    }

    #[test]
    fn test_third_segment() {
        // 1101-1800 at divisor 7: 700 / 7 = 100
        assert_eq!(level_bonus_diminishing(1800), 300);
        // 200 + floor(7 / 7)
        assert_eq!(level_bonus_diminishing(1107), 201);
    }

    #[test]
    fn test_flooring_is_per_segment() {
        // 501 levels: 500/5 = 100, then 1/6 = 0
        assert_eq!(level_bonus_diminishing(501), 100);
        // 506 levels: 100 + floor(6/6)
        assert_eq!(level_bonus_diminishing(506), 101);
    }

    #[test]
    fn test_segment_breakdown() {
        let parts: Vec<LevelSegment> = segments(1200).collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], LevelSegment { levels: 500, divisor: 5, bonus: 100 });
        assert_eq!(parts[1], LevelSegment { levels: 600, divisor: 6, bonus: 100 });
        assert_eq!(parts[2], LevelSegment { levels: 100, divisor: 7, bonus: 14 });
    }

    #[test]
    fn test_huge_level_terminates() {
        let bonus = level_bonus_diminishing(u32::MAX);
        assert!(bonus > level_bonus_diminishing(1_000_000));
        // Range grows by 100 each step, so ~sqrt(2 * level / 100) segments
        assert!(segments(u32::MAX).count() < 10_000);
    }
}
