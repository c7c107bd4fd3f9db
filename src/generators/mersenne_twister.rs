//! 32-bit Mersenne Twister PRNG (MT19937).
//!
//! Canonical constant set: 624-word state regenerated in bulk by the twist
//! recurrence, with an invertible tempering transform applied to each word
//! on output. The tempering step improves the output distribution but loses
//! no information, which is exactly what makes the state-reconstruction
//! attack in [`crate::recovery::mt19937`] possible.

use crate::generators::ByteStream;

/// State size in 32-bit words.
pub const STATE_WORDS: usize = 624;

const SHIFT: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

pub(crate) const TEMPER_SHIFT_U: u32 = 11;
pub(crate) const TEMPER_SHIFT_S: u32 = 7;
pub(crate) const TEMPER_MASK_B: u32 = 0x9D2C_5680;
pub(crate) const TEMPER_SHIFT_T: u32 = 15;
pub(crate) const TEMPER_MASK_C: u32 = 0xEFC6_0000;
pub(crate) const TEMPER_SHIFT_L: u32 = 18;

/// Applies the MT19937 tempering transform to a raw state word.
///
/// Four XOR-with-shifted-self steps, each individually reversible.
pub(crate) fn temper(mut y: u32) -> u32 {
    y ^= y >> TEMPER_SHIFT_U;
    y ^= (y << TEMPER_SHIFT_S) & TEMPER_MASK_B;
    y ^= (y << TEMPER_SHIFT_T) & TEMPER_MASK_C;
    y ^= y >> TEMPER_SHIFT_L;
    y
}

/// MT19937 engine with period 2^19937 - 1.
///
/// `index` counts how many tempered outputs have been consumed since the
/// last twist; when it reaches [`STATE_WORDS`] the next call to
/// [`next_u32`](Self::next_u32) regenerates the whole state first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt19937 {
    words: [u32; STATE_WORDS],
    index: usize,
}

impl Mt19937 {
    /// Creates a generator from a seed via the standard seeding recurrence.
    ///
    /// Each state word is derived from the previous one with the Knuth
    /// multiplier 1812433253, diffusing even a small seed across all 624
    /// positions.
    ///
    /// # Parameters
    /// - `seed`: Initial value for `words[0]`.
    pub fn new(seed: u32) -> Self {
        let mut words = [0u32; STATE_WORDS];
        words[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = words[i - 1];
            words[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Mt19937 {
            words,
            index: STATE_WORDS,
        }
    }

    /// Creates a generator from a fully specified state array.
    ///
    /// The index is set to [`STATE_WORDS`], so the next output performs a
    /// twist first. This is the injection point for state recovery: with
    /// `words[i] = untemper(y_i)` for 624 consecutive observations, the
    /// resulting generator continues the observed sequence exactly.
    ///
    /// # Parameters
    /// - `words`: The 624 raw (untempered) state words.
    pub fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Mt19937 {
            words,
            index: STATE_WORDS,
        }
    }

    /// Regenerates all 624 state words from the twist recurrence.
    ///
    /// The in-place update makes the state array a sliding window over the
    /// recurrence `w[n+624] = f(w[n], w[n+1], w[n+397])`: wrapped reads pick
    /// up already-updated words, which is precisely the next window entry.
    fn twist(&mut self) {
        for i in 0..STATE_WORDS {
            let y = (self.words[i] & UPPER_MASK)
                | (self.words[(i + 1) % STATE_WORDS] & LOWER_MASK);
            let mut next = self.words[(i + SHIFT) % STATE_WORDS] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.words[i] = next;
        }
        self.index = 0;
    }

    /// Produces the next tempered 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_WORDS {
            self.twist();
        }
        let y = self.words[self.index];
        self.index += 1;
        temper(y)
    }
}

impl ByteStream for Mt19937 {
    fn next_word(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn word_width(&self) -> usize {
        4
    }
}
