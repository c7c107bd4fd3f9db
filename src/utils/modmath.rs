//! Modular arithmetic helpers for the recovery algorithms.
//!
//! All routines widen through `u128`/`i128` so that products of 63-bit
//! operands never overflow.

/// Computes the greatest common divisor of two unsigned values.
///
/// # Parameters
/// - `a`: First operand.
/// - `b`: Second operand.
///
/// # Returns
/// `gcd(a, b)`; by convention `gcd(0, 0) == 0`.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Computes `(a * b) mod m` without intermediate overflow.
///
/// # Parameters
/// - `a`: First factor.
/// - `b`: Second factor.
/// - `m`: Modulus, must be non-zero.
///
/// # Returns
/// The product reduced into `[0, m)`.
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Computes `(a - b) mod m`, always yielding a value in `[0, m)`.
///
/// # Parameters
/// - `a`: Minuend.
/// - `b`: Subtrahend.
/// - `m`: Modulus, must be non-zero.
///
/// # Returns
/// The non-negative residue of the difference.
pub fn mod_sub(a: u64, b: u64, m: u64) -> u64 {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Computes the modular multiplicative inverse of `a` modulo `m`.
///
/// Runs the extended Euclidean algorithm over `i128`.
///
/// # Parameters
/// - `a`: Value to invert.
/// - `m`: Modulus, must be greater than 1.
///
/// # Returns
/// `Some(b)` with `a * b ≡ 1 (mod m)`, or `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m <= 1 {
        return None;
    }
    let (mut old_r, mut r) = ((a % m) as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        let next_r = old_r - q * r;
        old_r = r;
        r = next_r;
        let next_s = old_s - q * s;
        old_s = s;
        s = next_s;
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m as i128) as u64)
}
