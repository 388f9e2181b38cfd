//! Shared terminal utilities.
//!
//! Box drawing, entropy estimates and the help screen.

mod output;
mod text;

pub use output::*;
pub use text::*;
