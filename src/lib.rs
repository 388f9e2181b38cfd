//! Password generation with guaranteed character category coverage.
//!
//! Every password contains at least one digit, one uppercase letter, one
//! lowercase letter and one symbol. All randomness comes from a
//! cryptographically secure generator, and the final ordering is a uniform
//! Fisher–Yates shuffle.
//!
//! ```no_run
//! let password = coverpass::generate(20)?;
//! assert_eq!(password.len(), 20);
//!
//! let any_length = coverpass::generate_password();
//! assert!((12..=16).contains(&any_length.len()));
//! # Ok::<(), coverpass::Error>(())
//! ```

pub mod charset;
pub mod error;
pub mod pass;
pub mod random;

pub use charset::Category;
pub use error::{Error, Result};
pub use pass::{LENGTH_RANGE, MIN_LENGTH, generate, generate_password, generate_password_with, generate_with};
pub use random::{SecureSource, SystemSource, secure_shuffle, secure_shuffle_with};
