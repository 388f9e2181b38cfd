//! Library error type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Too short to hold one character from every category.
    #[error(
        "password length {length} is too short: at least {minimum} characters are required, one per character category"
    )]
    InvalidLength { length: usize, minimum: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
