//! Statistical quality tests for byte streams.
//!
//! Four classical tests applied to raw generator output: Shannon entropy,
//! chi-square uniformity, Kolmogorov-Smirnov uniformity, and lagged
//! autocorrelation. All operate on plain byte slices so any
//! [`crate::generators::ByteStream`] can feed them. These tests measure
//! distribution quality only — the Mersenne Twister passes all four while
//! being completely predictable from 624 outputs.

pub mod autocorrelation;
pub mod chi_square;
pub mod entropy;
pub mod kolmogorov_smirnov;

pub use autocorrelation::autocorrelation;
pub use chi_square::chi_square;
pub use entropy::shannon_entropy;
pub use kolmogorov_smirnov::kolmogorov_smirnov;

/// Outcome of a hypothesis test against the uniform distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    /// The test statistic.
    pub statistic: f64,
    /// Probability of a statistic at least this extreme under uniformity.
    pub p_value: f64,
    /// Whether the sequence is consistent with uniformity at the chosen
    /// significance level.
    pub pass: bool,
}
