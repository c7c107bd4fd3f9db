//! Shannon entropy per byte.
//!
//! `H = -sum(p_i * log2(p_i))` over the 256 byte values, with a theoretical
//! maximum of 8.0 bits/byte. The closer to 8.0, the more uniform the byte
//! distribution.

/// Computes the Shannon entropy of a byte sequence in bits per byte.
///
/// # Parameters
/// - `data`: Byte sequence to analyze.
///
/// # Returns
/// Entropy in `[0.0, 8.0]`; `0.0` for empty input.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let n = data.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}
