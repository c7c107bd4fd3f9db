//! PRNG laboratory: generator models, state-recovery attacks, and
//! statistical quality tests.
//!
//! The crate demonstrates that two widely deployed pseudo-random
//! generators are cryptographically invertible: an observer who captures
//! enough raw output can reconstruct the exact internal state and predict
//! every future value. Six generator families share one output interface
//! so the statistical suite and the attacks stay generator-agnostic.
//!
//! # Architecture
//!
//! ```text
//! generators  (LCG, MT19937, BBS, HMAC-DRBG, system, XOR, Box-Muller)
//!     │ ByteStream — next_word / generate / generate_bytes
//!     ├──────────────► stats     (entropy, chi-square, KS, autocorrelation)
//!     ▼
//! recovery    (recover_lcg, recover_mt19937 / untemper)
//!     │
//!     ▼
//! Recovered   (cloned engine, synchronized with the attacked generator)
//! ```
//!
//! # Examples
//!
//! Clone a Mersenne Twister from 624 observed outputs:
//!
//! ```
//! use unrandom::{recover_mt19937, Mt19937};
//!
//! let mut target = Mt19937::new(19650218);
//! let observed: Vec<u32> = (0..624).map(|_| target.next_u32()).collect();
//!
//! let mut clone = recover_mt19937(&observed).unwrap().generator;
//! for _ in 0..10 {
//!     assert_eq!(clone.next_u32(), target.next_u32());
//! }
//! ```
//!
//! Recover LCG parameters from six outputs:
//!
//! ```
//! use unrandom::{recover_lcg, ByteStream, Lcg};
//!
//! let mut target = Lcg::glibc(42);
//! let observed = target.generate(6);
//!
//! let recovered = recover_lcg(&observed, None).unwrap();
//! assert_eq!(recovered.generator.multiplier(), 1103515245);
//! ```
//!
//! None of the modeled generators is cryptographically secure, and that is
//! the point: the only members of the family that resist recovery are the
//! HMAC-DRBG and the OS entropy source.

#![deny(clippy::all)]

pub mod error;
pub mod generators;
pub mod recovery;
pub mod stats;
pub(crate) mod utils;

pub use error::UnrandomError;
pub use generators::bbs::BlumBlumShub;
pub use generators::box_muller::BoxMuller;
pub use generators::hmac_drbg::HmacDrbg;
pub use generators::lcg::Lcg;
pub use generators::mersenne_twister::Mt19937;
pub use generators::system::SystemRandom;
pub use generators::xor_combiner::XorCombiner;
pub use generators::ByteStream;
pub use recovery::{recover_lcg, recover_mt19937, untemper, Confidence, Recovered};
pub use stats::{autocorrelation, chi_square, kolmogorov_smirnov, shannon_entropy, TestOutcome};
