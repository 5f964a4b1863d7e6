use crate::config::ControllerConfig;
use crate::constants::{THROTTLE_FLOOR, THROTTLE_STEPS};
use crate::gap::find_max_gap;
use crate::smoothing::smooth_ranges;
use gapfollow_data::{Command, Scan};

/// Reactive follow-the-gap controller.
///
/// Stateless between scans: one `compute` call runs the whole pipeline
/// (smooth, gap search, steering, throttle) over its input and keeps
/// nothing but the tuning constants.
#[derive(Clone, Debug)]
pub struct GapFollowController {
    config: ControllerConfig,
}

impl GapFollowController {
    pub fn new(config: ControllerConfig) -> GapFollowController {
        GapFollowController { config }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Computes the steering and throttle command for one scan.
    ///
    /// Deterministic and side-effect free. The scan must contain at least
    /// one beam; hosts validate that before calling (`run_controller` drops
    /// empty scans).
    pub fn compute(&self, scan: &Scan) -> Command {
        let smoothed = smooth_ranges(&scan.ranges);
        let gap = find_max_gap(&smoothed, self.config.clear_distance);
        let steering = self.steering_angle(gap.midpoint(), scan.len());
        let throttle = self.throttle(steering, &smoothed);
        Command { steering, throttle }
    }

    /// Maps a target beam index linearly onto the steering range.
    ///
    /// The sensor's field of view is spread over `total_points` beams, so
    /// the beam offset from the scan center (a real-valued half, not a
    /// floored one) times the per-beam increment gives the heading of the
    /// target, clamped to the actuator's authority limit.
    fn steering_angle(&self, midpoint: usize, total_points: usize) -> f64 {
        let angle_increment = self.config.field_of_view / total_points as f64;
        let angle = (midpoint as f64 - total_points as f64 / 2.) * angle_increment;
        angle.clamp(-self.config.max_steer, self.config.max_steer)
    }

    /// Shapes the throttle from the steering decision and the smoothed scan.
    ///
    /// Straight with open road ahead: throttle scales with the forward
    /// clearance average. Otherwise: a step table on the worst-case
    /// proximity anywhere in the scan. Either way the steering magnitude
    /// attenuates the result, so sharper turns drive slower.
    fn throttle(&self, steering: f64, smoothed: &[f64]) -> f64 {
        let center_avg = self.center_average(smoothed);
        let min_distance = smoothed.iter().copied().fold(f64::INFINITY, f64::min);

        let base = if center_avg > self.config.straight_clear_distance
            && steering.abs() < self.config.straight_steer_limit
        {
            // No-return readings push the average to infinity; cap it
            // before scaling.
            let center_avg = center_avg.min(self.config.range_cap);
            0.5 * (center_avg + 0.01) / self.config.range_cap
        } else {
            step_throttle(min_distance)
        };

        self.config.throttle_decay * base * (1. - steering.abs() + 0.01)
    }

    /// Mean of the smoothed ranges over the central window spanning
    /// `target_fraction` of the scan width, i.e. what the vehicle sees
    /// straight ahead.
    ///
    /// Window bounds are computed in floating point and truncated. On very
    /// short scans the window can collapse to zero width; it then falls
    /// back to the single center beam instead of dividing by zero.
    fn center_average(&self, smoothed: &[f64]) -> f64 {
        let n = smoothed.len();
        let center = n / 2;
        let half_window = n as f64 * self.config.target_fraction / 2.;
        let lo = ((center as f64 - half_window) as usize).min(n - 1);
        let hi = ((center as f64 + half_window) as usize).min(n);
        if lo >= hi {
            return smoothed[center.min(n - 1)];
        }
        let window = &smoothed[lo..hi];
        window.iter().sum::<f64>() / window.len() as f64
    }
}

/// Base throttle for the reactive branch, selected by the worst-case
/// distance to any obstacle. First matching bracket wins, far to near.
fn step_throttle(min_distance: f64) -> f64 {
    for &(threshold, base) in THROTTLE_STEPS.iter() {
        if min_distance > threshold {
            return base;
        }
    }
    THROTTLE_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn controller() -> GapFollowController {
        GapFollowController::new(ControllerConfig::default())
    }

    #[test]
    fn test_steering_angle_bounds() {
        let c = controller();
        for total in [3usize, 10, 100, 1080] {
            for midpoint in 0..total {
                let angle = c.steering_angle(midpoint, total);
                assert!((-1.0..=1.0).contains(&angle));
            }
        }
    }

    #[test]
    fn test_steering_angle_centered_is_zero() {
        let c = controller();
        assert_eq!(c.steering_angle(50, 100), 0.0);
    }

    #[test]
    fn test_steering_angle_clamps_at_edges() {
        let c = controller();
        // Beam 0 of a wide scan is PI/2 to the side, past the clamp.
        assert_eq!(c.steering_angle(0, 1000), -1.0);
        assert_eq!(c.steering_angle(999, 1000), 1.0);
    }

    #[test]
    fn test_step_throttle_brackets() {
        assert_eq!(step_throttle(5.0), 0.15);
        assert_eq!(step_throttle(0.61), 0.15);
        assert_eq!(step_throttle(0.5), 0.2);
        assert_eq!(step_throttle(0.2), 0.15);
        assert_eq!(step_throttle(0.1), 0.04);
        assert_eq!(step_throttle(0.05), 0.01);
        assert_eq!(step_throttle(0.0), 0.01);
    }

    #[test]
    fn test_step_throttle_thresholds_are_strict() {
        assert_eq!(step_throttle(0.6), 0.2);
        assert_eq!(step_throttle(0.4), 0.15);
        assert_eq!(step_throttle(0.12), 0.04);
        assert_eq!(step_throttle(0.09), 0.01);
    }

    #[test]
    fn test_center_average_window() {
        let c = controller();
        // 100 beams at 5% width: indices 47..52.
        let mut ranges = vec![1.0; 100];
        for i in 47..52 {
            ranges[i] = 8.0;
        }
        assert_eq!(c.center_average(&ranges), 8.0);
    }

    #[test]
    fn test_center_average_collapsed_window() {
        let c = controller();
        // One beam: the window rounds to zero width, falls back to the
        // center beam instead of dividing by zero.
        assert_eq!(c.center_average(&[4.2]), 4.2);
        // Two beams: the truncated window is just the first beam.
        assert_eq!(c.center_average(&[1.0, 2.0]), 1.0);
    }

    #[test]
    fn test_steering_magnitude_reduces_throttle() {
        let c = controller();
        let open = vec![10.0; 100];
        assert!(c.throttle(0.0, &open) > c.throttle(0.09, &open));
        // Reactive branch, same bracket, sharper turn.
        let near = vec![0.5; 100];
        assert!(c.throttle(0.3, &near) > c.throttle(0.8, &near));
    }

    #[test]
    fn test_compute_straight_open_road() {
        let cmd = controller().compute(&Scan::new(vec![10.0; 100]));
        // Gap spans the scan, midpoint 49, one beam left of center.
        assert!((cmd.steering - (-PI / 100.)).abs() < 1e-12);
        // Straight branch: 0.9 * 0.5 * (10 + 0.01) / 10 * (1 - |a| + 0.01).
        assert!((cmd.throttle - 0.4408032).abs() < 1e-6);
    }

    #[test]
    fn test_compute_caps_infinite_clearance() {
        let cmd = controller().compute(&Scan::new(vec![f64::INFINITY; 100]));
        assert!((cmd.throttle - 0.4408032).abs() < 1e-6);
    }

    #[test]
    fn test_compute_near_obstacle_crawls() {
        // Obstacle block at the scan center, survives smoothing.
        let mut ranges = vec![9.9; 100];
        for i in 48..=52 {
            ranges[i] = 0.05;
        }
        let cmd = controller().compute(&Scan::new(ranges));
        // Widest gap is the left side, [0, 48], midpoint 24.
        assert!((cmd.steering - (-26. * PI / 100.)).abs() < 1e-12);
        // Worst-case distance 0.05 bottoms out the step table.
        assert!((cmd.throttle - 0.0017386732).abs() < 1e-9);
        assert!(cmd.throttle > 0.0);
    }

    #[test]
    fn test_compute_all_blocked_degenerates() {
        // Nothing clears the threshold: gap collapses to beam 0 and the
        // steering pins at the clamp.
        let cmd = controller().compute(&Scan::new(vec![1.0; 100]));
        assert_eq!(cmd.steering, -1.0);
        assert!((cmd.throttle - 0.00135).abs() < 1e-12);
    }

    #[test]
    fn test_throttle_never_negative() {
        let c = controller();
        let scans: Vec<Vec<f64>> = vec![
            vec![0.0; 10],
            vec![0.05; 100],
            vec![1.0; 3],
            vec![10.0; 100],
            vec![f64::INFINITY; 50],
            (0..100).map(|i| i as f64 / 10.).collect(),
            (0..100).rev().map(|i| i as f64 / 10.).collect(),
            vec![5.0],
            vec![0.3, 8.0],
        ];
        for ranges in scans {
            let cmd = c.compute(&Scan::new(ranges));
            assert!(cmd.throttle >= 0.0);
            assert!(cmd.steering.abs() <= 1.0);
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let c = controller();
        let scan = Scan::new((0..360).map(|i| 2. + (i as f64 * 0.1).sin()).collect());
        assert_eq!(c.compute(&scan), c.compute(&scan));
    }
}
