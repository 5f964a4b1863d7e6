#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold one full sweep of lidar range data.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    /// Distance to an object at each beam (in meters).
    /// Beams are ordered and evenly spaced across the sensor's field of view.
    /// A no-return reading is reported as `f64::INFINITY`.
    pub ranges: Vec<f64>,
}

impl Scan {
    pub fn new(ranges: Vec<f64>) -> Scan {
        Scan { ranges }
    }

    /// Number of beams in the sweep.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        let scan = Scan::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(scan.len(), 3);
        assert!(!scan.is_empty());

        let scan = Scan::new(vec![]);
        assert_eq!(scan.len(), 0);
        assert!(scan.is_empty());
    }
}
