use crate::constants::{
    DEFAULT_CLEAR_DISTANCE, DEFAULT_FIELD_OF_VIEW, DEFAULT_MAX_STEER,
    DEFAULT_RANGE_CAP, DEFAULT_STRAIGHT_CLEAR_DISTANCE, DEFAULT_STRAIGHT_STEER_LIMIT,
    DEFAULT_TARGET_FRACTION, DEFAULT_THROTTLE_DECAY,
};
use crate::error::GapFollowError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tunable constants of the controller.
///
/// `Default` gives the tuning the vehicle drives with; individual fields can
/// be overridden from a TOML file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Minimum smoothed range for a beam to count as part of a gap (meters).
    pub clear_distance: f64,
    /// Steering clamp, in normalized actuator units.
    pub max_steer: f64,
    /// Fraction of the scan width averaged for the forward-clearance check.
    pub target_fraction: f64,
    /// Attenuation applied to every throttle command.
    pub throttle_decay: f64,
    /// Forward clearance above which the straight-ahead throttle branch
    /// applies (meters).
    pub straight_clear_distance: f64,
    /// Steering magnitude below which the vehicle counts as driving straight.
    pub straight_steer_limit: f64,
    /// Cap substituted for no-return readings in the clearance average
    /// (meters).
    pub range_cap: f64,
    /// Angular sweep covered by one scan (radians).
    pub field_of_view: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            clear_distance: DEFAULT_CLEAR_DISTANCE,
            max_steer: DEFAULT_MAX_STEER,
            target_fraction: DEFAULT_TARGET_FRACTION,
            throttle_decay: DEFAULT_THROTTLE_DECAY,
            straight_clear_distance: DEFAULT_STRAIGHT_CLEAR_DISTANCE,
            straight_steer_limit: DEFAULT_STRAIGHT_STEER_LIMIT,
            range_cap: DEFAULT_RANGE_CAP,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
        }
    }
}

impl ControllerConfig {
    /// Loads a configuration from a TOML file.
    /// Missing fields keep their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GapFollowError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, GapFollowError> {
        Ok(toml::from_str(contents)?)
    }
}
