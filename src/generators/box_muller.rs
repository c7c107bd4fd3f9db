//! Box-Muller normal transform.
//!
//! Turns a uniform byte source into standard normal deviates. The default
//! path is the Marsaglia polar method, which avoids the trigonometric calls
//! of the original 1958 form: sample points in the square [-1, 1]² until
//! one lands inside the unit circle, then scale by the distance to the
//! center. Each round yields two independent normals; the second is banked
//! for the next call.
//!
//! Output quality is entirely inherited from the uniform source: feeding an
//! LCG produces visibly worse normals than feeding the OS generator.

use crate::generators::ByteStream;

/// Normal deviate generator over any uniform source.
pub struct BoxMuller<S: ByteStream> {
    source: S,
    spare: Option<f64>,
}

impl<S: ByteStream> BoxMuller<S> {
    /// Creates a transform over the given uniform source.
    ///
    /// # Parameters
    /// - `source`: Generator supplying uniform values in `[0, 1)`.
    pub fn new(source: S) -> Self {
        BoxMuller {
            source,
            spare: None,
        }
    }

    /// Returns the next standard normal deviate N(0, 1).
    ///
    /// Consumes the banked spare if one exists, otherwise draws a fresh
    /// pair by the polar method and banks the second value.
    pub fn next(&mut self) -> f64 {
        if let Some(value) = self.spare.take() {
            return value;
        }

        // Rejection sampling: keep only points inside the unit circle.
        let (u, v, s) = loop {
            let u = 2.0 * self.source.next_f64() - 1.0;
            let v = 2.0 * self.source.next_f64() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                break (u, v, s);
            }
        };

        let scale = (-2.0 * s.ln() / s).sqrt();
        self.spare = Some(v * scale);
        u * scale
    }

    /// Generates `n` deviates from N(mu, sigma).
    ///
    /// # Parameters
    /// - `n`: Number of values to generate.
    /// - `mu`: Mean of the target distribution.
    /// - `sigma`: Standard deviation of the target distribution.
    pub fn generate(&mut self, n: usize, mu: f64, sigma: f64) -> Vec<f64> {
        (0..n).map(|_| mu + sigma * self.next()).collect()
    }
}

/// Trigonometric Box-Muller form (the original 1958 construction).
///
/// Transforms two independent uniforms in `(0, 1]` into two independent
/// standard normals. Slower than the polar method because of the `cos`/`sin`
/// calls; kept for reference and cross-checking.
///
/// # Parameters
/// - `u0`: First uniform in `(0, 1]`.
/// - `u1`: Second uniform in `(0, 1]`.
pub fn box_muller_pair(u0: f64, u1: f64) -> (f64, f64) {
    let r = (-2.0 * u0.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u1;
    (r * theta.cos(), r * theta.sin())
}
