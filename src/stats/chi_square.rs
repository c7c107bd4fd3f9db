//! Chi-square test for byte uniformity.
//!
//! Compares the observed frequency of each of the 256 byte values against
//! the expected `n / 256`. With 255 degrees of freedom the chi-square
//! distribution is close enough to normal that the p-value is computed via
//! the normal approximation `Z = (stat - df) / sqrt(2 * df)` instead of
//! table lookups.

use crate::stats::TestOutcome;

const BINS: usize = 256;
const DEGREES_OF_FREEDOM: f64 = 255.0;

/// CDF of the standard normal distribution.
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Normal approximation to the chi-square p-value.
fn approx_p_value(statistic: f64) -> f64 {
    if statistic < 0.0 {
        return 1.0;
    }
    let z = (statistic - DEGREES_OF_FREEDOM) / (2.0 * DEGREES_OF_FREEDOM).sqrt();
    1.0 - norm_cdf(z)
}

/// Runs the chi-square uniformity test on a byte sequence.
///
/// # Parameters
/// - `data`: Byte sequence to analyze.
/// - `alpha`: Significance level (0.05 is the conventional choice).
///
/// # Returns
/// The statistic, its approximate p-value, and the verdict
/// (`pass` when `p_value > alpha`). Empty input fails with a p-value of 1.
pub fn chi_square(data: &[u8], alpha: f64) -> TestOutcome {
    if data.is_empty() {
        return TestOutcome {
            statistic: 0.0,
            p_value: 1.0,
            pass: false,
        };
    }

    let mut counts = [0u64; BINS];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let expected = data.len() as f64 / BINS as f64;
    let statistic: f64 = counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta / expected
        })
        .sum();

    let p_value = approx_p_value(statistic);
    TestOutcome {
        statistic,
        p_value,
        pass: p_value > alpha,
    }
}
