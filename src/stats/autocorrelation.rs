//! Lagged autocorrelation of a byte sequence.
//!
//! Measures the linear correlation between values separated by a fixed
//! lag: covariance between `(x_i)` and `(x_{i+k})` divided by the overall
//! variance. A sound generator scores near 0 for every lag above 0; a
//! short-period generator shows spikes at multiples of its period.

/// Computes the normalized autocorrelation coefficient for each lag.
///
/// # Parameters
/// - `data`: Byte sequence to analyze.
/// - `lags`: Lags to evaluate, typically small powers of two.
///
/// # Returns
/// One `(lag, coefficient)` pair per requested lag, coefficients in
/// `[-1.0, 1.0]`. Degenerate cases (fewer than 2 bytes, zero variance, or
/// a lag at or beyond the sequence length) yield `0.0`.
pub fn autocorrelation(data: &[u8], lags: &[usize]) -> Vec<(usize, f64)> {
    let n = data.len();
    if n < 2 {
        return lags.iter().map(|&lag| (lag, 0.0)).collect();
    }

    let values: Vec<f64> = data.iter().map(|&b| b as f64).collect();
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
    if variance == 0.0 {
        return lags.iter().map(|&lag| (lag, 0.0)).collect();
    }

    lags.iter()
        .map(|&lag| {
            if lag >= n {
                return (lag, 0.0);
            }
            let covariance: f64 = (0..n - lag)
                .map(|i| (values[i] - mean) * (values[i + lag] - mean))
                .sum::<f64>()
                / (n - lag) as f64;
            (lag, covariance / variance)
        })
        .collect()
}
