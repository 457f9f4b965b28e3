//! Local maxima detection based on slope

use crate::constants::MIN_PEAK_SAMPLES;

/// Find the indices of local maxima in `y`
///
/// With `d[k] = y[k+1] - y[k]`, index `k` is a peak when the slopes on
/// either side change sign (or one is flat), `d[k] * d[k-1] <= 0`, and the
/// slope does not increase, `d[k] <= d[k-1]`. A flat top, a run entered
/// rising and left falling, reports only its first sample. Flat shoulders
/// on a rising or falling flank are reported at every qualifying sample.
///
/// # Example
/// ```
/// use halfpower_core::analysis::find_peaks;
/// assert_eq!(find_peaks(&[0.0, 1.0, 3.0, 2.0, 4.0, 1.0]), vec![2, 4]);
/// ```
pub fn find_peaks(y: &[f64]) -> Vec<usize> {
    if y.len() < MIN_PEAK_SAMPLES {
        return Vec::new();
    }

    let d: Vec<f64> = y.windows(2).map(|w| w[1] - w[0]).collect();

    // first non-zero slope at or after each difference
    let mut exit = vec![0.0; d.len()];
    let mut next = 0.0;
    for k in (0..d.len()).rev() {
        if d[k] != 0.0 {
            next = d[k];
        }
        exit[k] = next;
    }

    let mut peaks = Vec::new();
    let mut entry = 0.0;
    let mut prev_hit = false;

    for k in 1..d.len() {
        if d[k - 1] != 0.0 {
            entry = d[k - 1];
        }
        let hit = d[k] * d[k - 1] <= 0.0 && d[k] <= d[k - 1];
        let top_continuation = prev_hit && d[k - 1] == 0.0 && entry > 0.0 && exit[k] < 0.0;
        if hit && !top_continuation {
            peaks.push(k);
        }
        prev_hit = hit;
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sin_degrees(n: usize) -> Vec<f64> {
        (0..n).map(|deg| (deg as f64).to_radians().sin()).collect()
    }

    #[test]
    fn test_sine_two_periods() {
        assert_eq!(find_peaks(&sin_degrees(720)), vec![90, 450]);
    }

    #[test]
    fn test_unimodal() {
        let y = [0.0, 0.3, 0.9, 1.4, 1.1, 0.4, 0.1];
        assert_eq!(find_peaks(&y), vec![3]);
    }

    #[test]
    fn test_plateau_reported_once() {
        let y = [0.0, 1.0, 2.0, 2.0, 2.0, 1.0, 0.0];
        assert_eq!(find_peaks(&y), vec![2]);
    }

    #[test]
    fn test_flat_shoulders_reported_per_sample() {
        assert_eq!(find_peaks(&[0.0, 1.0, 1.0, 1.0, 2.0, 1.0]), vec![1, 2, 4]);
        assert_eq!(find_peaks(&[3.0, 2.0, 2.0, 2.0, 1.0]), vec![2, 3]);
    }

    #[test]
    fn test_flat_run_at_series_edge() {
        assert_eq!(find_peaks(&[0.0, 1.0, 1.0, 1.0]), vec![1, 2]);
        assert_eq!(find_peaks(&[2.0, 2.0, 2.0, 1.0]), vec![1, 2]);
    }

    #[test]
    fn test_minimum_excluded() {
        let y = [3.0, 1.0, 0.0, 1.0, 3.0];
        assert!(find_peaks(&y).is_empty());
    }

    #[test]
    fn test_rising_shoulder() {
        // flat run on a rising slope matches the tie-break
        let y = [0.0, 1.0, 1.0, 2.0, 1.0];
        assert_eq!(find_peaks(&y), vec![1, 3]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(find_peaks(&[]).is_empty());
        assert!(find_peaks(&[1.0]).is_empty());
        assert!(find_peaks(&[1.0, 2.0]).is_empty());
        assert!(find_peaks(&[1.0, 2.0, 3.0, 4.0]).is_empty());
        assert!(find_peaks(&[4.0, 3.0, 2.0, 1.0]).is_empty());
    }

    #[test]
    fn test_endpoints_never_peaks() {
        let y = [5.0, 1.0, 2.0, 1.0, 5.0];
        assert_eq!(find_peaks(&y), vec![2]);
    }
}
