//! Numerical constants for damping estimation

/// Amplitude ratio at the half-power point (1/sqrt(2), approximately -3 dB).
pub const HALF_POWER_RATIO: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Minimum number of samples needed to form a local maximum.
pub const MIN_PEAK_SAMPLES: usize = 3;
