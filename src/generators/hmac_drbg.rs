//! HMAC-DRBG over HMAC-SHA256 (NIST SP 800-90A).
//!
//! Deterministic CSPRNG with a two-value internal state: a 32-byte key `K`
//! and a 32-byte value `V`. Seeding and reseeding absorb entropy through a
//! two-pass update; every generate call ends with a single-pass update so
//! earlier outputs cannot be reconstructed from a captured state.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::generators::ByteStream;

type HmacSha256 = Hmac<Sha256>;

const OUTPUT_LEN: usize = 32;

/// HMAC-DRBG engine.
///
/// Included as the well-behaved contrast to the invertible generators: the
/// recovery attacks in this crate have no analogue here.
#[derive(Debug, Clone)]
pub struct HmacDrbg {
    key: [u8; OUTPUT_LEN],
    value: [u8; OUTPUT_LEN],
}

impl HmacDrbg {
    /// Instantiates the DRBG from entropy and a nonce.
    ///
    /// # Parameters
    /// - `entropy`: Initial entropy input.
    /// - `nonce`: Per-instantiation unique value.
    pub fn new(entropy: &[u8], nonce: &[u8]) -> Self {
        let mut drbg = HmacDrbg {
            key: [0x00; OUTPUT_LEN],
            value: [0x01; OUTPUT_LEN],
        };
        drbg.update(&[entropy, nonce]);
        drbg
    }

    /// Reseeds the generator with fresh entropy.
    ///
    /// # Parameters
    /// - `entropy`: New entropy input to absorb into the state.
    pub fn reseed(&mut self, entropy: &[u8]) {
        self.update(&[entropy]);
    }

    /// Computes HMAC-SHA256 under `key` over the concatenated parts.
    fn mac(key: &[u8; OUTPUT_LEN], parts: &[&[u8]]) -> [u8; OUTPUT_LEN] {
        // HMAC accepts keys of any length, so construction cannot fail.
        let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
        for part in parts {
            mac.update(part);
        }
        mac.finalize().into_bytes().into()
    }

    /// K/V update procedure from SP 800-90A.
    ///
    /// A second pass runs only when provided data is non-empty (seeding or
    /// reseeding); the post-generation update passes no data.
    fn update(&mut self, provided: &[&[u8]]) {
        let has_data = provided.iter().any(|part| !part.is_empty());

        let mut parts: Vec<&[u8]> = vec![&self.value[..], &[0x00][..]];
        parts.extend_from_slice(provided);
        self.key = Self::mac(&self.key, &parts);
        self.value = Self::mac(&self.key, &[&self.value[..]]);

        if has_data {
            let mut parts: Vec<&[u8]> = vec![&self.value[..], &[0x01][..]];
            parts.extend_from_slice(provided);
            self.key = Self::mac(&self.key, &parts);
            self.value = Self::mac(&self.key, &[&self.value[..]]);
        }
    }
}

impl ByteStream for HmacDrbg {
    /// Next 32-bit integer, big-endian over four generated bytes.
    fn next_word(&mut self) -> u64 {
        let bytes = self.generate_bytes(4);
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64
    }

    fn word_width(&self) -> usize {
        4
    }

    /// Native byte output: iterate `V = HMAC(K, V)` until `n` bytes are
    /// collected, then refresh K and V.
    fn generate_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(n + OUTPUT_LEN);
        while out.len() < n {
            self.value = Self::mac(&self.key, &[&self.value[..]]);
            out.extend_from_slice(&self.value);
        }
        self.update(&[]);
        out.truncate(n);
        out
    }
}
