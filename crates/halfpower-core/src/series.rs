//! Sample series - a sampled frequency response curve
//!
//! Holds (frequency, amplitude) pairs that have been checked for the
//! preconditions of the damping estimator.

use ndarray::ArrayView2;
use num_complex::Complex64;

use crate::error::{Result, SeriesError};

/// A validated frequency vs amplitude curve
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// Frequency column, strictly increasing
    frequency: Vec<f64>,
    /// Amplitude column
    amplitude: Vec<f64>,
}

impl SampleSeries {
    /// Create a series from separate frequency and amplitude columns
    ///
    /// # Arguments
    /// * `frequency` - Frequency points, strictly increasing
    /// * `amplitude` - Response amplitude at each frequency point
    ///
    /// # Example
    /// ```
    /// use halfpower_core::SampleSeries;
    /// let series = SampleSeries::new(vec![1.0, 2.0, 3.0], vec![0.1, 1.0, 0.2]).unwrap();
    /// assert_eq!(series.len(), 3);
    /// ```
    pub fn new(frequency: Vec<f64>, amplitude: Vec<f64>) -> Result<Self> {
        check_columns(&frequency, &amplitude)?;
        if let Some(k) = frequency.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NotIncreasing { index: k + 1 });
        }
        Ok(Self {
            frequency,
            amplitude,
        })
    }

    /// Create from an n x 2 table of (frequency, amplitude) rows
    pub fn from_table(xy: ArrayView2<f64>) -> Result<Self> {
        if xy.ncols() != 2 {
            return Err(SeriesError::InvalidShape {
                columns: xy.ncols(),
            });
        }
        Self::new(xy.column(0).to_vec(), xy.column(1).to_vec())
    }

    /// Create from (frequency, amplitude) pairs
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self> {
        let (frequency, amplitude) = pairs.iter().map(|&[f, a]| (f, a)).unzip();
        Self::new(frequency, amplitude)
    }

    /// Create from a complex frequency response, using its magnitude
    pub fn from_complex_response(frequency: Vec<f64>, response: &[Complex64]) -> Result<Self> {
        Self::new(frequency, response.iter().map(|c| c.norm()).collect())
    }

    /// Get the frequency column
    #[inline]
    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    /// Get the amplitude column
    #[inline]
    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    /// Get the number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}

/// Check that two columns pair up and hold only finite values
pub(crate) fn check_columns(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(SeriesError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    match x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        Some(index) => Err(SeriesError::NonFinite { index }),
        None => Ok(()),
    }
}
