//! LCG parameter recovery from observed outputs.
//!
//! Given consecutive outputs `x_0, x_1, ...` of an LCG with unknown
//! parameters, the differences `t_i = x_{i+1} - x_i` follow the same
//! recurrence without the increment: `t_{i+1} = a * t_i (mod m)`. It
//! follows that `t_{i+1} * t_{i-1} - t_i²` is a multiple of `m` for every
//! offset, so the GCD of several such products converges on the modulus.
//! With `m` in hand, `a` falls out of one modular division and `c` out of
//! one subtraction.
//!
//! The GCD can land on a small multiple of the true modulus when the
//! random cofactors share a factor. The candidate is therefore refined by
//! dividing out small cofactors until the full observed sequence satisfies
//! the recurrence; a candidate that never verifies is rejected rather than
//! returned.

use crate::error::UnrandomError;
use crate::generators::lcg::Lcg;
use crate::recovery::{Confidence, Recovered};
use crate::utils::modmath::{gcd, mod_inverse, mod_mul, mod_sub};

/// Minimum number of consecutive samples accepted by [`recover_lcg`].
pub const MIN_SAMPLES: usize = 6;

/// Largest spurious cofactor divided out of the GCD candidate.
const MAX_COFACTOR: u128 = 1000;

/// Recovers the parameters and state of an LCG from consecutive outputs.
///
/// # Parameters
/// - `samples`: At least [`MIN_SAMPLES`] consecutive outputs, oldest first.
/// - `known_modulus`: The modulus when it is known out-of-band; `None` to
///   infer it from the samples.
///
/// # Returns
/// A clone synchronized at the last observed output: its first `next()`
/// call produces the value the attacked generator emits next. The
/// recovered `a` and `c` are reduced into `[0, m)`. Confidence is always
/// [`Confidence::ExactGivenAssumptions`], since the modulus rests on a GCD
/// inference or an out-of-band claim.
///
/// # Errors
/// - [`UnrandomError::InsufficientSamples`] for fewer than
///   [`MIN_SAMPLES`] samples.
/// - [`UnrandomError::DegenerateSequence`] for a constant sequence, or when
///   no candidate modulus makes the observations consistent.
/// - [`UnrandomError::NoModularInverse`] when no observed difference is
///   invertible modulo the candidate modulus after trying every offset.
pub fn recover_lcg(
    samples: &[u64],
    known_modulus: Option<u64>,
) -> Result<Recovered<Lcg>, UnrandomError> {
    if samples.len() < MIN_SAMPLES {
        return Err(UnrandomError::InsufficientSamples);
    }
    if samples.windows(2).all(|w| w[0] == w[1]) {
        return Err(UnrandomError::DegenerateSequence);
    }

    let (modulus, multiplier, increment) = match known_modulus {
        Some(m) => {
            if m == 0 {
                return Err(UnrandomError::InvalidParameters);
            }
            let (a, c) = solve_with_modulus(samples, m)?;
            (m, a, c)
        }
        None => infer_modulus_and_solve(samples)?,
    };

    // Clone state = last observed output; with the post-update output
    // convention, the next call reproduces the generator's next value.
    let generator = Lcg::new(samples[samples.len() - 1], multiplier, increment, modulus)?;
    Ok(Recovered {
        generator,
        confidence: Confidence::ExactGivenAssumptions,
    })
}

/// Signed first differences of the observed samples.
fn differences(samples: &[u64]) -> Vec<i128> {
    samples
        .windows(2)
        .map(|w| w[1] as i128 - w[0] as i128)
        .collect()
}

/// Infers the modulus from difference products, then solves for `(a, c)`.
fn infer_modulus_and_solve(samples: &[u64]) -> Result<(u64, u64, u64), UnrandomError> {
    let diffs = differences(samples);

    let mut candidate: u128 = 0;
    for i in 1..diffs.len() - 1 {
        let product = diffs[i + 1] * diffs[i - 1] - diffs[i] * diffs[i];
        candidate = gcd(candidate, product.unsigned_abs());
    }
    if candidate <= 1 {
        return Err(UnrandomError::DegenerateSequence);
    }

    // The GCD is some multiple k*m of the true modulus, with k the shared
    // factor of the random cofactors (almost always 1, occasionally a
    // small integer). Divide out candidate cofactors in increasing order
    // and keep the first modulus the whole sequence verifies under. The
    // true modulus must also exceed every observation.
    let floor = samples.iter().copied().max().unwrap_or(0) as u128;
    let mut last_err = UnrandomError::DegenerateSequence;
    for k in 1..=MAX_COFACTOR {
        if candidate % k != 0 {
            continue;
        }
        let m = candidate / k;
        if m <= floor {
            break;
        }
        if m > u64::MAX as u128 {
            continue;
        }
        match solve_with_modulus(samples, m as u64) {
            Ok((a, c)) => return Ok((m as u64, a, c)),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}

/// Solves for `(a, c)` under a fixed modulus and verifies the result.
///
/// Tries each difference offset until one is invertible and the derived
/// parameters reproduce every observed transition.
fn solve_with_modulus(samples: &[u64], m: u64) -> Result<(u64, u64), UnrandomError> {
    let diffs: Vec<u64> = differences(samples)
        .iter()
        .map(|&d| d.rem_euclid(m as i128) as u64)
        .collect();

    let mut saw_inverse = false;
    for i in 0..diffs.len() - 1 {
        let inverse = match mod_inverse(diffs[i], m) {
            Some(inv) => inv,
            None => continue,
        };
        saw_inverse = true;

        let a = mod_mul(diffs[i + 1], inverse, m);
        let c = mod_sub(samples[i + 1] % m, mod_mul(a, samples[i] % m, m), m);
        if verify(samples, m, a, c) {
            return Ok((a, c));
        }
    }

    Err(if saw_inverse {
        UnrandomError::DegenerateSequence
    } else {
        UnrandomError::NoModularInverse
    })
}

/// Checks that every observed transition satisfies the recurrence and that
/// every sample lies below the modulus.
fn verify(samples: &[u64], m: u64, a: u64, c: u64) -> bool {
    if samples.iter().any(|&x| x >= m) {
        return false;
    }
    samples
        .windows(2)
        .all(|w| (mod_mul(a, w[0], m) + c) % m == w[1])
}
