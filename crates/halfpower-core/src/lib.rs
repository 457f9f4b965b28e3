//! halfpower-core: Modal damping from frequency response curves
//!
//! Estimates critical damping ratios of resonance peaks with the half-power
//! (-3 dB) bandwidth method.
//!
//! ## Modules
//!
//! - `series` - Validated frequency vs amplitude samples
//! - `analysis` - Peak detection, zero-crossing interpolation, damping estimation
//! - `constants` - Half-power level and peak detection limits

pub mod analysis;
pub mod constants;
pub mod error;
pub mod series;

pub use analysis::{find_damping, DampingPoint, DampingResult};
pub use error::SeriesError;
pub use series::SampleSeries;
