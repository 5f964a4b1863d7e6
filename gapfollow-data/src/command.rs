#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Actuator command produced for one scan.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    /// Normalized steering command in `[-1.0, 1.0]`.
    /// Negative values steer toward the first beam of the scan.
    pub steering: f64,
    /// Normalized forward-drive command, never negative.
    pub throttle: f64,
}

impl Command {
    /// Failsafe command: zero steering, zero throttle.
    /// Must be the last command delivered before an actuator channel is
    /// released.
    pub const STOP: Command = Command {
        steering: 0.0,
        throttle: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_zeroed() {
        assert_eq!(Command::STOP.steering, 0.0);
        assert_eq!(Command::STOP.throttle, 0.0);
    }
}
