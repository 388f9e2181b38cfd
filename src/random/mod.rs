//! Secure random sources and the Fisher–Yates shuffle built on them.

mod shuffle;
mod system;

pub use shuffle::{secure_shuffle, secure_shuffle_with};
pub use system::SystemSource;

/// A source of uniformly distributed bounded integers fit for secrets.
///
/// Implementations backed by a generator must be cryptographically secure.
/// [`SystemSource`] is the production implementation; other implementations
/// exist to script draws in tests.
pub trait SecureSource {
    /// Uniform integer in `[0, bound)`.
    ///
    /// Callers never pass a zero `bound`.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniformly chosen element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}
