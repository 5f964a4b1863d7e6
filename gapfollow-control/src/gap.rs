/// Closed index interval `[start, end]` of the widest contiguous run of open
/// beams in one smoothed scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gap {
    pub start: usize,
    pub end: usize,
}

impl Gap {
    /// Target beam for steering: the integer midpoint of the interval.
    pub fn midpoint(&self) -> usize {
        (self.start + self.end) / 2
    }
}

/// Finds the longest contiguous run of ranges strictly above
/// `clear_distance`.
///
/// Ties favor the leftmost run: a later run must be strictly longer to
/// displace the recorded one. If no beam clears the threshold the interval
/// collapses to `[0, 0]`, steering hard toward the first beam. Known quirk,
/// kept as is; see DESIGN.md.
pub(crate) fn find_max_gap(ranges: &[f64], clear_distance: f64) -> Gap {
    let mut gap = Gap { start: 0, end: 0 };
    let mut max_len = 0;
    let mut curr = 0;
    for (i, &range) in ranges.iter().enumerate() {
        if range > clear_distance {
            curr += 1;
            if curr > max_len {
                max_len = curr;
                gap.end = i;
                gap.start = i + 1 - curr;
            }
        } else {
            curr = 0;
        }
    }
    gap
}
