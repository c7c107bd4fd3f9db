//! Kolmogorov-Smirnov test against the uniform byte distribution.
//!
//! `D` is the largest gap between the empirical CDF of the normalized
//! bytes and the uniform CDF on [0, 1]. The p-value comes from the
//! asymptotic Kolmogorov series with the Stephens small-sample correction
//! `lambda = (sqrt(n) + 0.12 + 0.11 / sqrt(n)) * D`; the alternating series
//! converges in well under twenty terms in practice.

use crate::stats::TestOutcome;

const SERIES_LIMIT: usize = 100;
const SERIES_EPSILON: f64 = 1e-15;

/// Asymptotic Kolmogorov p-value for statistic `d` over `n` observations.
fn kolmogorov_p_value(d: f64, n: usize) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    if lambda == 0.0 {
        return 1.0;
    }
    let mut sum = 0.0;
    for k in 1..SERIES_LIMIT {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * (-2.0 * (k * k) as f64 * lambda * lambda).exp();
        sum += term;
        if term.abs() < SERIES_EPSILON {
            break;
        }
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

/// Runs the KS uniformity test on a byte sequence.
///
/// # Parameters
/// - `data`: Byte sequence to analyze.
/// - `alpha`: Significance level (0.01 is the conventional choice here —
///   the byte discretization inflates `D` slightly, so the stricter level
///   avoids false alarms on sound generators).
///
/// # Returns
/// The `D` statistic, its p-value, and the verdict (`pass` when
/// `p_value > alpha`). Empty input passes vacuously.
pub fn kolmogorov_smirnov(data: &[u8], alpha: f64) -> TestOutcome {
    let n = data.len();
    if n == 0 {
        return TestOutcome {
            statistic: 0.0,
            p_value: 1.0,
            pass: true,
        };
    }

    let mut values: Vec<f64> = data.iter().map(|&b| b as f64 / 255.0).collect();
    values.sort_by(|a, b| a.partial_cmp(b).expect("byte values are never NaN"));

    let mut d_plus: f64 = 0.0;
    let mut d_minus: f64 = 0.0;
    for (i, &v) in values.iter().enumerate() {
        d_plus = d_plus.max((i + 1) as f64 / n as f64 - v);
        d_minus = d_minus.max(v - i as f64 / n as f64);
    }
    let statistic = d_plus.max(d_minus);

    let p_value = kolmogorov_p_value(statistic, n);
    TestOutcome {
        statistic,
        p_value,
        pass: p_value > alpha,
    }
}
