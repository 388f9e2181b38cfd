//! In-place Fisher–Yates shuffle.

use super::{SecureSource, SystemSource};

/// Shuffle `items` in place using the system CSPRNG.
///
/// Every permutation is equally likely. Slices shorter than two elements are
/// left untouched and consume no randomness.
pub fn secure_shuffle<T>(items: &mut [T]) {
    secure_shuffle_with(items, &mut SystemSource::new());
}

/// Shuffle `items` in place, drawing from `source`.
///
/// Walks from the last index down to 1, swapping each position with one drawn
/// from `[0, i]`. A slice of length `n` takes exactly `n - 1` draws.
pub fn secure_shuffle_with<T, R: SecureSource>(items: &mut [T], source: &mut R) {
    log::trace!("shuffling {} items", items.len());
    for i in (1..items.len()).rev() {
        let j = source.below(i + 1);
        items.swap(i, j);
    }
}
