/// Smoothed range above which a beam counts as open for gap purposes (meters).
pub(crate) const DEFAULT_CLEAR_DISTANCE: f64 = 1.23;
/// Steering authority limit of the actuator (normalized command).
pub(crate) const DEFAULT_MAX_STEER: f64 = 1.0;
/// Fraction of the array width averaged for the forward-clearance check.
pub(crate) const DEFAULT_TARGET_FRACTION: f64 = 0.05;
/// Global throttle attenuation applied to every command.
pub(crate) const DEFAULT_THROTTLE_DECAY: f64 = 0.9;
/// Forward clearance above which the road ahead counts as open (meters).
pub(crate) const DEFAULT_STRAIGHT_CLEAR_DISTANCE: f64 = 7.0;
/// Steering magnitude below which the vehicle counts as driving straight.
pub(crate) const DEFAULT_STRAIGHT_STEER_LIMIT: f64 = 0.1;
/// Upper bound substituted for no-return readings in the clearance average.
pub(crate) const DEFAULT_RANGE_CAP: f64 = 10.0;
/// Angular sweep of the sensor (radians). Must match the real sensor or the
/// steering mapping is wrong.
pub(crate) const DEFAULT_FIELD_OF_VIEW: f64 = std::f64::consts::PI;

/// Base-throttle step table for the reactive branch, ordered far to near.
/// The first bracket whose threshold the worst-case distance exceeds wins.
pub(crate) const THROTTLE_STEPS: [(f64, f64); 4] =
    [(0.6, 0.15), (0.4, 0.2), (0.12, 0.15), (0.09, 0.04)];
/// Base throttle when every bracket is exhausted (obstacle nearly touching).
pub(crate) const THROTTLE_FLOOR: f64 = 0.01;

pub(crate) const SCAN_QUEUE_DEPTH: usize = 10;
pub(crate) const COMMAND_QUEUE_DEPTH: usize = 10;
