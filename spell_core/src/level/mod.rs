//! Level bonus - Additive output contribution from character level
//!
//! Two unrelated curves exist and must not be merged:
//! - Diminishing: segmented, used by the base-power calculator
//! - Flat: `level / 5`, used by the preset calculator

mod diminishing;
mod flat;

pub use diminishing::{level_bonus_diminishing, segments, LevelSegment};
pub use flat::level_bonus_flat;

/// Level bonus constants
pub mod constants {
    /// Levels covered by the first diminishing segment
    pub const FIRST_SEGMENT_RANGE: u32 = 500;

    /// Divisor of the first diminishing segment (+1 per 5 levels)
    pub const FIRST_SEGMENT_DIVISOR: u32 = 5;

    /// Range growth per segment
    pub const SEGMENT_RANGE_STEP: u32 = 100;

    /// Divisor growth per segment
    pub const SEGMENT_DIVISOR_STEP: u32 = 1;

    /// Divisor of the flat curve
    pub const FLAT_DIVISOR: u32 = 5;
}
