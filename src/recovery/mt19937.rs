//! MT19937 state reconstruction from observed outputs.
//!
//! The tempering transform applied to each output word is a composition of
//! four XOR-with-shifted-self steps, each individually reversible, so a raw
//! state word can be recovered from any single output. Untempering 624
//! consecutive outputs therefore rebuilds the complete internal state, and
//! a generator seeded with that state predicts every future output.
//!
//! Inverting one step reconstructs the pre-XOR value chunk by chunk: for a
//! right-shift step the top `k` bits are untouched and each lower chunk
//! depends only on already-recovered higher bits, so the closed-form XOR
//! cascade `y ^ (y >> k) ^ (y >> 2k) ^ ...` recovers the word; for a masked
//! left-shift step the bottom `k` bits are untouched and a fixed-point
//! iteration from the low end recovers the rest.
//!
//! Alignment note: the in-place twist is exactly the sliding recurrence
//! `w[n+624] = f(w[n], w[n+1], w[n+397])`, so the 624-word window may start
//! at any epoch offset — the reconstructed clone stays in lockstep either
//! way. What the algorithm cannot survive is a window that is not one
//! uninterrupted stream; surplus samples beyond the 624th are replayed
//! against the clone to catch exactly that.

use crate::error::UnrandomError;
use crate::generators::mersenne_twister::{
    Mt19937, STATE_WORDS, TEMPER_MASK_B, TEMPER_MASK_C, TEMPER_SHIFT_L, TEMPER_SHIFT_S,
    TEMPER_SHIFT_T, TEMPER_SHIFT_U,
};
use crate::recovery::{Confidence, Recovered};

/// Inverts `y ^= y >> shift`.
///
/// The original word equals `y ^ (y >> shift) ^ (y >> 2*shift) ^ ...`; the
/// cascade terminates once the shifted term underflows to zero.
fn invert_xor_rshift(mut value: u32, shift: u32) -> u32 {
    let mut shifted = value;
    loop {
        shifted >>= shift;
        if shifted == 0 {
            return value;
        }
        value ^= shifted;
    }
}

/// Inverts `y ^= (y << shift) & mask`.
///
/// Fixed-point iteration from the untouched low bits: each pass recovers
/// the next `shift` bits, so `32 / shift` passes converge on the original.
fn invert_xor_lshift_masked(value: u32, shift: u32, mask: u32) -> u32 {
    let mut original = value;
    for _ in 0..32 / shift {
        original = value ^ ((original << shift) & mask);
    }
    original
}

/// Inverts the full MT19937 tempering transform on one output word.
///
/// Undoes the four steps in reverse application order.
///
/// # Parameters
/// - `output`: An observed (tempered) 32-bit output.
///
/// # Returns
/// The raw state word that produced the output.
pub fn untemper(output: u32) -> u32 {
    let y = invert_xor_rshift(output, TEMPER_SHIFT_L);
    let y = invert_xor_lshift_masked(y, TEMPER_SHIFT_T, TEMPER_MASK_C);
    let y = invert_xor_lshift_masked(y, TEMPER_SHIFT_S, TEMPER_MASK_B);
    invert_xor_rshift(y, TEMPER_SHIFT_U)
}

/// Reconstructs an MT19937 generator from consecutive observed outputs.
///
/// The first [`STATE_WORDS`] samples are untempered into a complete state;
/// the clone's index is set so its next output is the attacked generator's
/// next output. Any surplus samples are held out and replayed against the
/// clone as verification.
///
/// # Parameters
/// - `samples`: At least [`STATE_WORDS`] consecutive raw outputs from one
///   uninterrupted stream, oldest first.
///
/// # Returns
/// A clone in lockstep with the original from the observation point onward,
/// with [`Confidence::Exact`]: the reconstruction is deterministic.
///
/// # Errors
/// - [`UnrandomError::InsufficientSamples`] for fewer than
///   [`STATE_WORDS`] samples.
/// - [`UnrandomError::TwistBoundaryMismatch`] when surplus samples
///   contradict the reconstruction, proving the observations were not one
///   uninterrupted stream. With exactly [`STATE_WORDS`] samples no
///   verification data exists and consistency is the caller's contract.
pub fn recover_mt19937(samples: &[u32]) -> Result<Recovered<Mt19937>, UnrandomError> {
    if samples.len() < STATE_WORDS {
        return Err(UnrandomError::InsufficientSamples);
    }

    let mut words = [0u32; STATE_WORDS];
    for (word, &sample) in words.iter_mut().zip(samples.iter()) {
        *word = untemper(sample);
    }

    let mut generator = Mt19937::from_words(words);
    for &held_out in &samples[STATE_WORDS..] {
        if generator.next_u32() != held_out {
            return Err(UnrandomError::TwistBoundaryMismatch);
        }
    }

    Ok(Recovered {
        generator,
        confidence: Confidence::Exact,
    })
}
