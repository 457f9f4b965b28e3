//! Critical damping estimation with the half-power bandwidth method
//!
//! For every resonance peak the amplitude curve is shifted down by
//! `amp / sqrt(2)` and the nearest crossings on each side of the peak bound
//! the half-power band. With `Q = fn / (f2 - f1)` the damping ratio is
//! `zeta = 1 / (2Q)`.

use ndarray::{Array2, ArrayView2};

use super::peaks::find_peaks;
use super::roots::crossings;
use crate::constants::HALF_POWER_RATIO;
use crate::error::Result;
use crate::series::SampleSeries;

/// Damping estimate for a single resonance peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingPoint {
    /// Frequency of the peak
    pub frequency: f64,
    /// Critical damping ratio (1.0 is critical damping)
    pub damping_ratio: f64,
    /// Half-power crossing below the peak
    pub lower: f64,
    /// Half-power crossing above the peak
    pub upper: f64,
}

impl DampingPoint {
    /// Width of the half-power band
    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.upper - self.lower
    }

    /// Quality factor, `fn / bandwidth`
    #[inline]
    pub fn quality_factor(&self) -> f64 {
        self.frequency / self.bandwidth()
    }
}

/// Damping estimates in ascending frequency order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DampingResult {
    points: Vec<DampingPoint>,
}

impl DampingResult {
    #[inline]
    pub fn points(&self) -> &[DampingPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DampingPoint> {
        self.points.iter()
    }

    /// (frequency, damping_ratio) rows
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.frequency, p.damping_ratio])
            .collect()
    }

    /// (frequency, damping_ratio) rows as an n x 2 array
    pub fn to_array(&self) -> Array2<f64> {
        let mut table = Array2::<f64>::zeros((self.points.len(), 2));
        for (mut row, p) in table.rows_mut().into_iter().zip(&self.points) {
            row[0] = p.frequency;
            row[1] = p.damping_ratio;
        }
        table
    }
}

impl<'a> IntoIterator for &'a DampingResult {
    type Item = &'a DampingPoint;
    type IntoIter = std::slice::Iter<'a, DampingPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Estimate critical damping of every resonance peak in `series`
///
/// Peaks without a half-power crossing on both sides are skipped, so the
/// result never holds more points than there are peaks. A zero-amplitude
/// peak is its own crossing on both sides; its empty band is skipped too.
///
/// # Example
/// ```
/// use halfpower_core::{find_damping, SampleSeries};
/// let f: Vec<f64> = (0..720).map(f64::from).collect();
/// let a: Vec<f64> = f.iter().map(|d| d.to_radians().sin()).collect();
/// let result = find_damping(&SampleSeries::new(f, a).unwrap());
/// assert_eq!(result.len(), 2);
/// ```
pub fn find_damping(series: &SampleSeries) -> DampingResult {
    let x = series.frequency();
    let amplitude = series.amplitude();
    let mut points = Vec::new();

    for j in find_peaks(amplitude) {
        let (fn_, amp) = (x[j], amplitude[j]);
        let level = amp * HALF_POWER_RATIO;
        let y: Vec<f64> = amplitude.iter().map(|&a| a - level).collect();

        let left = crossings(&x[..=j], &y[..=j]);
        let right = crossings(&x[j..], &y[j..]);

        match (left.last(), right.first()) {
            (Some(&lower), Some(&upper)) if upper > lower => {
                let q = fn_ / (upper - lower);
                log::trace!("peak at {fn_}: band [{lower}, {upper}], Q = {q}");
                points.push(DampingPoint {
                    frequency: fn_,
                    damping_ratio: 1.0 / (2.0 * q),
                    lower,
                    upper,
                });
            }
            _ => log::debug!("skipping peak at {fn_}: no half-power band around it"),
        }
    }

    DampingResult { points }
}

/// Estimate damping from an n x 2 (frequency, amplitude) table
pub fn find_damping_table(xy: ArrayView2<f64>) -> Result<DampingResult> {
    let series = SampleSeries::from_table(xy)?;
    Ok(find_damping(&series))
}
