//! Pseudo-random generator families.
//!
//! Each generator owns its state as a plain value and exposes its output
//! through the [`ByteStream`] trait, so downstream consumers (statistical
//! tests, combiners, the Box-Muller transform) never depend on a concrete
//! generator type.

pub mod bbs;
pub mod box_muller;
pub mod hmac_drbg;
pub mod lcg;
pub mod mersenne_twister;
pub mod system;
pub mod xor_combiner;

/// Uniform output interface implemented by every generator.
///
/// Word-oriented generators get byte output for free through the default
/// packing: each output word contributes its [`word_width`](Self::word_width)
/// low-order bytes in little-endian order, and the concatenation is
/// truncated to the requested length. Byte-native generators override
/// [`generate_bytes`](Self::generate_bytes) to emit their stream directly.
pub trait ByteStream {
    /// Produces the next raw output, widened to 64 bits.
    fn next_word(&mut self) -> u64;

    /// Number of low-order bytes of each word that carry output (1..=8).
    fn word_width(&self) -> usize;

    /// Produces `n` consecutive output words.
    ///
    /// # Parameters
    /// - `n`: Number of words to generate.
    fn generate(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.next_word()).collect()
    }

    /// Produces exactly `n` output bytes.
    ///
    /// # Parameters
    /// - `n`: Number of bytes to generate.
    fn generate_bytes(&mut self, n: usize) -> Vec<u8> {
        let width = self.word_width();
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            let word = self.next_word().to_le_bytes();
            let take = width.min(n - out.len());
            out.extend_from_slice(&word[..take]);
        }
        out
    }

    /// Produces a uniform value in `[0, 1)` from the next output word.
    fn next_f64(&mut self) -> f64 {
        let range = (1u128 << (8 * self.word_width() as u32)) as f64;
        self.next_word() as f64 / range
    }
}
