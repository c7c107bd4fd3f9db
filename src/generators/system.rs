//! Operating-system entropy source.
//!
//! Thin wrapper over the OS CSPRNG (`/dev/urandom` on Linux) behind the
//! same [`ByteStream`] interface as the deterministic generators, so the
//! statistical suite can use it as the quality reference. No seed, no
//! reproducible state.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::generators::ByteStream;

/// Stateless handle to the OS random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SystemRandom {
    /// Creates a new handle.
    pub fn new() -> Self {
        SystemRandom
    }
}

impl ByteStream for SystemRandom {
    /// Next 32-bit integer, big-endian over four OS-provided bytes.
    fn next_word(&mut self) -> u64 {
        let mut buf = [0u8; 4];
        OsRng.fill_bytes(&mut buf);
        u32::from_be_bytes(buf) as u64
    }

    fn word_width(&self) -> usize {
        4
    }

    fn generate_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut buf = vec![0u8; n];
        OsRng.fill_bytes(&mut buf);
        buf
    }
}
