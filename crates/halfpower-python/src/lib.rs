//! Python bindings for halfpower-core
//!
//! This module exposes halfpower-core functionality to Python via PyO3, so
//! a host application plugin can estimate damping from its curve data.
//!
//! ## Functions
//!
//! - `find_peaks` - Indices of local maxima
//! - `interp_roots` - Zero crossings by linear interpolation
//! - `find_damping` - Critical damping of every resonance peak

use pyo3::prelude::*;

mod analysis;

pub use analysis::{find_damping, find_peaks, interp_roots};

/// halfpower_python - Half-power bandwidth damping estimation in Rust
///
/// Example:
///     >>> import numpy as np
///     >>> import halfpower_python as hp
///     >>> x = np.arange(720.0)
///     >>> hp.find_damping(np.column_stack([x, np.sin(np.deg2rad(x))]))
///     array([[90. ,  0.5],
///            [450. ,  0.1]])
#[pymodule]
fn halfpower_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_peaks, m)?)?;
    m.add_function(wrap_pyfunction!(interp_roots, m)?)?;
    m.add_function(wrap_pyfunction!(find_damping, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
