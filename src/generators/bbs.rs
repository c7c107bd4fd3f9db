//! Blum-Blum-Shub generator.
//!
//! State update `x ← x² mod n` with `n = p * q` for Blum primes p and q
//! (prime and ≡ 3 mod 4). Only the low bit of each state value is emitted,
//! so predicting further output from observations is as hard as factoring
//! `n`. One useful bit per modular squaring makes it by far the slowest
//! generator in this crate.

use crate::error::UnrandomError;
use crate::generators::mersenne_twister::Mt19937;
use crate::generators::ByteStream;

/// Tests primality by trial division up to the square root.
///
/// # Parameters
/// - `n`: Value to test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Tests whether `n` is a Blum prime (prime and congruent to 3 mod 4).
///
/// Blum primes are required for the BBS sequence to reach its maximal
/// period and for the security argument to hold.
///
/// # Parameters
/// - `n`: Value to test.
pub fn is_blum_prime(n: u64) -> bool {
    is_prime(n) && n % 4 == 3
}

/// Searches for a Blum prime of the requested bit size.
///
/// Draws odd candidates in `[2^(bits-1), 2^bits)` from a seeded Mersenne
/// Twister until one passes the Blum prime test.
///
/// # Parameters
/// - `bits`: Bit size of the prime, in `[3, 32]`.
/// - `seed`: Seed for the candidate source.
///
/// # Errors
/// Returns [`UnrandomError::InvalidParameters`] if `bits` is outside
/// `[3, 32]` (below 3 no Blum prime of that exact size exists; above 32
/// the product would not fit the `u64` state).
pub fn generate_blum_prime(bits: u32, seed: u32) -> Result<u64, UnrandomError> {
    if !(3..=32).contains(&bits) {
        return Err(UnrandomError::InvalidParameters);
    }
    let mut mt = Mt19937::new(seed);
    let lo = 1u64 << (bits - 1);
    let hi = (1u64 << bits) - 1;
    loop {
        let candidate = (lo + mt.next_u32() as u64 % (hi - lo + 1)) | 1;
        if is_blum_prime(candidate) {
            return Ok(candidate);
        }
    }
}

/// Blum-Blum-Shub engine.
///
/// The initial state is `seed² mod n`, so two seeds differing only in sign
/// of their residue collapse to the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlumBlumShub {
    n: u64,
    state: u64,
}

impl BlumBlumShub {
    /// Creates a BBS generator from a seed and two Blum primes.
    ///
    /// # Parameters
    /// - `seed`: Initial value, squared into the state.
    /// - `p`: First Blum prime.
    /// - `q`: Second Blum prime.
    ///
    /// # Errors
    /// Returns [`UnrandomError::InvalidParameters`] if either factor fails
    /// the Blum prime test.
    pub fn new(seed: u64, p: u64, q: u64) -> Result<Self, UnrandomError> {
        if !is_blum_prime(p) || !is_blum_prime(q) {
            return Err(UnrandomError::InvalidParameters);
        }
        let n = p * q;
        let state = ((seed as u128 * seed as u128) % n as u128) as u64;
        Ok(BlumBlumShub { n, state })
    }

    /// Advances the state one squaring and returns its low bit.
    pub fn next_bit(&mut self) -> u8 {
        self.state = ((self.state as u128 * self.state as u128) % self.n as u128) as u64;
        (self.state & 1) as u8
    }

    /// Produces one byte from eight successive bits, most significant first.
    pub fn next_byte(&mut self) -> u8 {
        let mut value = 0u8;
        for _ in 0..8 {
            value = (value << 1) | self.next_bit();
        }
        value
    }

    /// Produces `n_bits` consecutive bits.
    ///
    /// # Parameters
    /// - `n_bits`: Number of bits to generate.
    pub fn generate_bits(&mut self, n_bits: usize) -> Vec<u8> {
        (0..n_bits).map(|_| self.next_bit()).collect()
    }
}

impl ByteStream for BlumBlumShub {
    fn next_word(&mut self) -> u64 {
        self.next_byte() as u64
    }

    fn word_width(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(383));
        assert!(is_prime(503));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(385));
    }

    #[test]
    fn test_is_blum_prime() {
        // 383 ≡ 3 (mod 4), 503 ≡ 3 (mod 4)
        assert!(is_blum_prime(383));
        assert!(is_blum_prime(503));
        // 5 is prime but ≡ 1 (mod 4)
        assert!(!is_blum_prime(5));
        assert!(!is_blum_prime(384));
    }

    #[test]
    fn test_rejects_non_blum_factors() {
        assert_eq!(
            BlumBlumShub::new(1, 5, 503),
            Err(UnrandomError::InvalidParameters)
        );
        assert_eq!(
            BlumBlumShub::new(1, 383, 9),
            Err(UnrandomError::InvalidParameters)
        );
    }

    #[test]
    fn test_bits_are_binary() {
        let mut gen = BlumBlumShub::new(12345, 383, 503).unwrap();
        for bit in gen.generate_bits(256) {
            assert!(bit <= 1);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = BlumBlumShub::new(12345, 383, 503).unwrap();
        let mut b = BlumBlumShub::new(12345, 383, 503).unwrap();
        assert_eq!(a.generate_bytes(32), b.generate_bytes(32));
    }

    #[test]
    fn test_byte_packs_bits_msb_first() {
        let mut bits = BlumBlumShub::new(9, 383, 503).unwrap();
        let mut bytes = BlumBlumShub::new(9, 383, 503).unwrap();
        let expected = bits
            .generate_bits(8)
            .iter()
            .fold(0u8, |acc, &b| (acc << 1) | b);
        assert_eq!(bytes.next_byte(), expected);
    }

    #[test]
    fn test_first_state_is_seed_squared() {
        let mut gen = BlumBlumShub::new(10, 7, 11).unwrap();
        // n = 77, x0 = 100 mod 77 = 23, x1 = 23^2 mod 77 = 529 mod 77 = 67 -> bit 1
        assert_eq!(gen.next_bit(), 1);
        // x2 = 67^2 mod 77 = 4489 mod 77 = 23 -> bit 1
        assert_eq!(gen.next_bit(), 1);
    }

    #[test]
    fn test_generate_blum_prime() {
        let p = generate_blum_prime(10, 42).unwrap();
        assert!(is_blum_prime(p));
        assert!(p >= 512 && p < 1024);
    }

    #[test]
    fn test_generate_blum_prime_bad_sizes() {
        assert_eq!(
            generate_blum_prime(2, 1),
            Err(UnrandomError::InvalidParameters)
        );
        assert_eq!(
            generate_blum_prime(33, 1),
            Err(UnrandomError::InvalidParameters)
        );
    }
}
