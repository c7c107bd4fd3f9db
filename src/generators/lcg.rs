//! Linear Congruential Generator.
//!
//! Implements the recurrence `x_{n+1} = (a * x_n + c) mod m`. The glibc
//! parameter set (the same one behind C's `rand()`) is provided as a
//! convenience constructor. The entire internal state is one integer, so
//! the sequence is fully predictable once the parameters are known — see
//! [`crate::recovery::lcg`] for the attack that recovers them.

use crate::error::UnrandomError;
use crate::generators::ByteStream;

/// The glibc multiplier used by `rand()`.
pub const GLIBC_MULTIPLIER: u64 = 1_103_515_245;
/// The glibc increment used by `rand()`.
pub const GLIBC_INCREMENT: u64 = 12_345;
/// The glibc modulus, 2^31.
pub const GLIBC_MODULUS: u64 = 1 << 31;

/// LCG engine over caller-supplied parameters.
///
/// Output convention: [`next`](Self::next) returns the *post-update* state,
/// i.e. the value of `current` after one application of the recurrence.
/// The recovery algorithm depends on this convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    modulus: u64,
    multiplier: u64,
    increment: u64,
    current: u64,
}

impl Lcg {
    /// Creates an LCG with explicit parameters.
    ///
    /// The seed becomes the initial state, reduced into `[0, modulus)`.
    ///
    /// # Parameters
    /// - `seed`: Initial state `x_0`.
    /// - `multiplier`: The factor `a`.
    /// - `increment`: The additive constant `c`.
    /// - `modulus`: The modulus `m`, determines the maximal period.
    ///
    /// # Errors
    /// Returns [`UnrandomError::InvalidParameters`] if `modulus == 0`.
    pub fn new(
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, UnrandomError> {
        if modulus == 0 {
            return Err(UnrandomError::InvalidParameters);
        }
        Ok(Lcg {
            modulus,
            multiplier: multiplier % modulus,
            increment: increment % modulus,
            current: seed % modulus,
        })
    }

    /// Creates an LCG with the glibc `rand()` parameters
    /// (a = 1103515245, c = 12345, m = 2^31).
    ///
    /// # Parameters
    /// - `seed`: Initial state `x_0`.
    pub fn glibc(seed: u64) -> Self {
        Lcg {
            modulus: GLIBC_MODULUS,
            multiplier: GLIBC_MULTIPLIER,
            increment: GLIBC_INCREMENT,
            current: seed % GLIBC_MODULUS,
        }
    }

    /// Advances the state one step and returns the new state.
    ///
    /// # Returns
    /// An integer in `[0, modulus)`.
    pub fn next(&mut self) -> u64 {
        let product = self.multiplier as u128 * self.current as u128 + self.increment as u128;
        self.current = (product % self.modulus as u128) as u64;
        self.current
    }

    /// Returns the modulus `m`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the multiplier `a`.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the increment `c`.
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Returns the current state `x_n`.
    pub fn current(&self) -> u64 {
        self.current
    }
}

impl ByteStream for Lcg {
    fn next_word(&mut self) -> u64 {
        self.next()
    }

    /// Bytes needed to hold `modulus - 1`.
    fn word_width(&self) -> usize {
        let bits = 64 - (self.modulus - 1).leading_zeros();
        bits.div_ceil(8).max(1) as usize
    }

    /// Uniform value `next() / m`, matching the generator's native range.
    fn next_f64(&mut self) -> f64 {
        self.next() as f64 / self.modulus as f64
    }
}
