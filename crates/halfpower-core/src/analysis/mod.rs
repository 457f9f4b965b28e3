//! Analysis module - half-power bandwidth damping estimation
//!
//! Provides the three stages of the estimator: peak detection, zero-crossing
//! interpolation and the damping calculation that combines them.

mod damping;
mod peaks;
mod roots;

pub use damping::{find_damping, find_damping_table, DampingPoint, DampingResult};
pub use peaks::find_peaks;
pub use roots::interp_roots;
