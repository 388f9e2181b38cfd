//! Password generation.

mod generate;

pub use generate::{
    LENGTH_RANGE, MIN_LENGTH, generate, generate_password, generate_password_with, generate_with,
};
