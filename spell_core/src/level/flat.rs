//! Flat level bonus used by the preset calculator

use super::constants::FLAT_DIVISOR;

/// Calculate the level bonus as `floor(level / 5)`, without diminishing returns
pub fn level_bonus_flat(level: u32) -> u32 {
    level / FLAT_DIVISOR
}
