//! The production source: an OS-seeded CSPRNG.

use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

use super::SecureSource;

/// [`SecureSource`] over a cryptographically secure generator.
///
/// Defaults to the thread-local generator from `rand`, which is seeded from
/// the operating system and reseeds periodically. Only generators marked
/// [`CryptoRng`] are accepted.
#[derive(Debug, Clone)]
pub struct SystemSource<R: CryptoRng = ThreadRng>(R);

impl SystemSource {
    pub fn new() -> Self {
        SystemSource(rand::rng())
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng> SystemSource<R> {
    /// Wrap a specific generator, e.g. a seeded `StdRng` for reproducible runs.
    pub fn from_rng(rng: R) -> Self {
        SystemSource(rng)
    }
}

impl<R: CryptoRng> SecureSource for SystemSource<R> {
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}
