//! Password assembly with guaranteed category coverage.

use std::ops::Range;

use zeroize::Zeroize;

use crate::charset::{self, Category};
use crate::error::{Error, Result};
use crate::random::{SecureSource, SystemSource, secure_shuffle_with};

/// Shortest length that can hold one character per category.
pub const MIN_LENGTH: usize = Category::COUNT;

/// Lengths chosen by [`generate_password`].
pub const LENGTH_RANGE: Range<usize> = 12..17;

/// Generate a password of exactly `length` characters using the system CSPRNG.
///
/// # Errors
///
/// [`Error::InvalidLength`] when `length` is below [`MIN_LENGTH`].
pub fn generate(length: usize) -> Result<String> {
    generate_with(length, &mut SystemSource::new())
}

/// Generate a password of exactly `length` characters, drawing from `source`.
///
/// The length check runs before any draw, so a rejected call consumes no
/// randomness.
pub fn generate_with<R: SecureSource>(length: usize, source: &mut R) -> Result<String> {
    if length < MIN_LENGTH {
        log::debug!("rejected password length {length}");
        return Err(Error::InvalidLength {
            length,
            minimum: MIN_LENGTH,
        });
    }
    Ok(assemble(length, source))
}

/// Generate a password with a length drawn uniformly from [`LENGTH_RANGE`].
pub fn generate_password() -> String {
    generate_password_with(&mut SystemSource::new())
}

/// [`generate_password`] drawing both the length and the characters from `source`.
pub fn generate_password_with<R: SecureSource>(source: &mut R) -> String {
    let length = LENGTH_RANGE.start + source.below(LENGTH_RANGE.len());
    assemble(length, source)
}

/// Callers guarantee `length >= MIN_LENGTH`.
fn assemble<R: SecureSource>(length: usize, source: &mut R) -> String {
    let mut buf: Vec<u8> = Vec::with_capacity(length);

    // One seed per category
    for category in Category::ALL {
        buf.push(*source.pick(category.members()));
    }

    // Filler is a flat draw over the pooled union, so bigger categories win
    // proportionally more slots.
    let pool = charset::pool();
    for _ in MIN_LENGTH..length {
        buf.push(*source.pick(pool));
    }

    secure_shuffle_with(&mut buf, source);

    let password: String = buf.iter().map(|&b| char::from(b)).collect();
    buf.zeroize();

    log::debug!("generated {length}-character password");
    password
}
