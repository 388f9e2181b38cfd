//! Password generation settings.

mod file;

use std::io;
use std::path::PathBuf;

/// Effective settings for one CLI run. `pass_length` of `None` means a random
/// length from the library's default range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: Option<usize>,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub show_entropy: bool,
}

impl Settings {
    pub fn load_from_file() -> io::Result<Self> {
        file::load(&file::default_path())
    }

    pub fn save_to_file(&self) -> io::Result<PathBuf> {
        let path = file::default_path();
        file::save(self, &path)?;
        Ok(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: None,
            number_of_passwords: 1,
            to_clipboard: false,
            show_entropy: false,
        }
    }
}
