//! XOR combining construction.
//!
//! Combines several byte sources position-wise with XOR. The result is as
//! unpredictable as the strongest source in the list: one sound generator
//! suffices even if every other input is fully compromised.

use crate::error::UnrandomError;
use crate::generators::ByteStream;

/// XOR combiner over a heterogeneous list of byte sources.
pub struct XorCombiner {
    sources: Vec<Box<dyn ByteStream>>,
}

impl XorCombiner {
    /// Creates a combiner from the given sources.
    ///
    /// # Parameters
    /// - `sources`: Generators to combine; consumed and owned.
    ///
    /// # Errors
    /// Returns [`UnrandomError::InvalidParameters`] if the list is empty.
    pub fn new(sources: Vec<Box<dyn ByteStream>>) -> Result<Self, UnrandomError> {
        if sources.is_empty() {
            return Err(UnrandomError::InvalidParameters);
        }
        Ok(XorCombiner { sources })
    }
}

impl ByteStream for XorCombiner {
    fn next_word(&mut self) -> u64 {
        self.generate_bytes(1)[0] as u64
    }

    fn word_width(&self) -> usize {
        1
    }

    fn generate_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = self.sources[0].generate_bytes(n);
        for source in self.sources.iter_mut().skip(1) {
            let bytes = source.generate_bytes(n);
            for (acc, b) in out.iter_mut().zip(bytes) {
                *acc ^= b;
            }
        }
        out
    }
}
