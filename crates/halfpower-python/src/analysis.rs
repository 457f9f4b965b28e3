//! Python bindings for the damping analysis functions

use halfpower_core::analysis;
use halfpower_core::SeriesError;
use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(e: SeriesError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Find indices of local maxima based on slope
///
/// Args:
///     y: 1-D array of amplitudes
///
/// Returns:
///     Integer array of peak indices, ascending
#[pyfunction]
pub fn find_peaks<'py>(py: Python<'py>, y: PyReadonlyArray1<'py, f64>) -> Bound<'py, PyArray1<i64>> {
    let y = y.as_array().to_vec();
    let peaks: Vec<i64> = analysis::find_peaks(&y)
        .into_iter()
        .map(|i| i as i64)
        .collect();
    peaks.to_pyarray(py)
}

/// Interpolate to estimate all x where y = 0
///
/// Args:
///     x: 1-D array of abscissae
///     y: 1-D array of values, same length as x
///
/// Returns:
///     Sorted array of unique roots
///
/// Raises:
///     ValueError: If the lengths differ or values are not finite
#[pyfunction]
pub fn interp_roots<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = x.as_array().to_vec();
    let y = y.as_array().to_vec();
    let roots = analysis::interp_roots(&x, &y).map_err(value_error)?;
    Ok(roots.to_pyarray(py))
}

/// Estimate critical damping using the half-power method
///
/// Args:
///     xy: Array of shape (n, 2) holding (frequency, amplitude) rows,
///         frequency strictly increasing
///
/// Returns:
///     Array of shape (m, 2) holding (frequency, damping ratio) rows, one per
///     resolvable peak
///
/// Raises:
///     ValueError: If the table is malformed
#[pyfunction]
pub fn find_damping<'py>(
    py: Python<'py>,
    xy: PyReadonlyArray2<'py, f64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let result = analysis::find_damping_table(xy.as_array()).map_err(value_error)?;
    Ok(result.to_array().to_pyarray(py))
}
