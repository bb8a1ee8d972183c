//! Stat scaling - Linear response of a spell to its governing stat

mod base_power;
mod constants;

pub use base_power::{
    BASE_POWER_MAX_MULT_FACTOR, BASE_POWER_MAX_OFFSET_FACTOR, BASE_POWER_MIN_MULT_FACTOR,
    BASE_POWER_MIN_OFFSET_FACTOR,
};
pub use constants::{ScalingConstants, StatComponents};
