/// Replaces each interior range with the average of itself and its two
/// neighbors. The endpoints copy through unmodified, so a scan shorter than
/// three beams comes back unchanged.
///
/// Suppresses single-sample sensor noise without shifting the apparent gap
/// location. No-return readings (`f64::INFINITY`) flow through the average
/// as ordinary large numbers.
pub(crate) fn smooth_ranges(ranges: &[f64]) -> Vec<f64> {
    let mut smoothed = ranges.to_vec();
    if ranges.len() < 3 {
        return smoothed;
    }
    for i in 1..ranges.len() - 1 {
        smoothed[i] = (ranges[i - 1] + ranges[i] + ranges[i + 1]) / 3.;
    }
    smoothed
}
