//! State-recovery attacks against the invertible generators.
//!
//! Both attacks consume raw observed output and return a [`Recovered`]
//! generator synchronized with the original: from the point of observation
//! onward the clone emits exactly the sequence the attacked generator will
//! emit. Recovery either verifies its reconstruction against the
//! observations (and any surplus held-out samples) or fails with a typed
//! error; it never hands back a plausible-looking but unchecked clone.

pub mod lcg;
pub mod mt19937;

pub use lcg::recover_lcg;
pub use mt19937::{recover_mt19937, untemper};

/// How much trust the reconstruction deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Deterministic reconstruction: the clone is provably the generator.
    Exact,
    /// Correct under the stated assumptions (e.g. the modulus was inferred
    /// from a GCD or supplied out-of-band).
    ExactGivenAssumptions,
}

/// A reconstructed generator plus the confidence of the reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Recovered<G> {
    /// The cloned engine, owning its own state, synchronized to continue
    /// the observed sequence.
    pub generator: G,
    /// Reconstruction confidence.
    pub confidence: Confidence,
}
