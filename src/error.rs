//! Error types for the unrandom library.

use std::fmt;

/// Errors produced by generator construction and state recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnrandomError {
    /// Too few observations to satisfy the algorithm's minimum.
    InsufficientSamples,
    /// Observations do not carry enough information to pin down the
    /// generator (e.g. a constant output sequence).
    DegenerateSequence,
    /// No observed difference is invertible modulo the candidate modulus,
    /// even after retrying every sample offset.
    NoModularInverse,
    /// Construction-time parameter violation (e.g. a zero modulus or a
    /// factor that is not a Blum prime).
    InvalidParameters,
    /// Held-out samples contradict the reconstructed state: the observation
    /// window was not one uninterrupted output stream.
    TwistBoundaryMismatch,
}

impl fmt::Display for UnrandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnrandomError::InsufficientSamples => {
                write!(f, "Not enough consecutive samples for recovery")
            }
            UnrandomError::DegenerateSequence => {
                write!(f, "Observed sequence carries too little information")
            }
            UnrandomError::NoModularInverse => {
                write!(f, "No observed difference is invertible modulo the modulus")
            }
            UnrandomError::InvalidParameters => {
                write!(f, "Generator parameters are outside the valid range")
            }
            UnrandomError::TwistBoundaryMismatch => {
                write!(f, "Held-out samples diverge from the reconstructed state")
            }
        }
    }
}

impl std::error::Error for UnrandomError {}
