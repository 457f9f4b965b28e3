//! Zero crossings of a sampled signal by linear interpolation

use crate::error::Result;
use crate::series::check_columns;

/// Interpolate to estimate every x where y = 0
///
/// Each adjacent pair of samples whose y values differ in sign (or touch
/// zero) contributes the root of the straight line through them. Returned
/// roots are sorted ascending with duplicates removed. The sample order of
/// `x` is not required to be increasing.
///
/// A sample with `y` exactly zero is a root at its own `x`. A run of
/// consecutive zero samples therefore yields one root per sample, each
/// reported once, rather than a single root for the whole run.
///
/// # Errors
/// Returns an error if `x` and `y` differ in length or hold non-finite values.
///
/// # Example
/// ```
/// use halfpower_core::analysis::interp_roots;
/// let x: Vec<f64> = (0..20).map(f64::from).collect();
/// let y: Vec<f64> = x.iter().map(|&x| (x - 10.0) * (x - 12.0)).collect();
/// assert_eq!(interp_roots(&x, &y).unwrap(), vec![10.0, 12.0]);
/// ```
pub fn interp_roots(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_columns(x, y)?;
    Ok(crossings(x, y))
}

/// Root search on columns already known to be valid
pub(crate) fn crossings(x: &[f64], y: &[f64]) -> Vec<f64> {
    let mut roots = Vec::new();

    for (xs, ys) in x.windows(2).zip(y.windows(2)) {
        let (x0, x1, y0, y1) = (xs[0], xs[1], ys[0], ys[1]);
        if y0 * y1 > 0.0 {
            continue;
        }
        // Samples sitting on zero are exact roots; this also covers the
        // 0/0 case of two consecutive zero samples.
        if y0 == 0.0 || y1 == 0.0 {
            if y0 == 0.0 {
                roots.push(x0);
            }
            if y1 == 0.0 {
                roots.push(x1);
            }
        } else {
            roots.push(x0 - y0 / (y1 - y0) * (x1 - x0));
        }
    }

    roots.sort_by(f64::total_cmp);
    roots.dedup();
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeriesError;
    use approx::assert_relative_eq;

    fn integers() -> Vec<f64> {
        (0..20).map(f64::from).collect()
    }

    #[test]
    fn test_roots_on_samples() {
        let x = integers();
        let y: Vec<f64> = x.iter().map(|&x| (x - 10.0) * (x - 12.0)).collect();
        assert_eq!(interp_roots(&x, &y).unwrap(), vec![10.0, 12.0]);
    }

    #[test]
    fn test_roots_between_samples() {
        let x = integers();
        let y: Vec<f64> = x.iter().map(|&x| (x - 8.5) * (x - 18.2)).collect();
        let roots = interp_roots(&x, &y).unwrap();

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 8.526, epsilon = 1e-3);
        assert_relative_eq!(roots[1], 18.184, epsilon = 1e-3);
    }

    #[test]
    fn test_consecutive_zeros() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 0.0, 0.0, -1.0, -2.0];
        let roots = interp_roots(&x, &y).unwrap();

        assert_eq!(roots, vec![1.0, 2.0]);
        assert!(roots.iter().all(|r| r.is_finite()));
    }

    #[test]
    fn test_all_zero() {
        let roots = interp_roots(&[0.0, 1.0], &[0.0, 0.0]).unwrap();
        assert_eq!(roots, vec![0.0, 1.0]);
    }

    #[test]
    fn test_no_crossing() {
        let x = integers();
        let y: Vec<f64> = x.iter().map(|&x| x * x + 1.0).collect();
        assert!(interp_roots(&x, &y).unwrap().is_empty());
        assert!(interp_roots(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_reversed_input_same_roots() {
        let x = integers();
        let y: Vec<f64> = x.iter().map(|&x| (x - 3.3) * (x - 15.7)).collect();
        let forward = interp_roots(&x, &y).unwrap();

        let xr: Vec<f64> = x.iter().rev().copied().collect();
        let yr: Vec<f64> = y.iter().rev().copied().collect();
        let backward = interp_roots(&xr, &yr).unwrap();

        assert_eq!(forward.len(), backward.len());
        for (a, b) in forward.iter().zip(&backward) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            interp_roots(&[0.0, 1.0], &[1.0]),
            Err(SeriesError::LengthMismatch { x: 2, y: 1 })
        );
    }
}
