//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};

use super::{CliFlags, Console, generate_batch};
use crate::settings::Settings;
use crate::terminal::{print_entropy, print_help};

/// Longest password the CLI will ask the library for.
pub const MAX_LENGTH: usize = 4096;

/// Why a run stopped before finishing normally.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    /// Report the message and exit non-zero.
    Failed(String),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    pub console: Console,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, super::ParseError> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            console: Console::new(flags.quiet),
            flags,
        })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.load_settings();
        self.apply_flags();
        self.validate()?;
        self.handle_save()?;
        self.handle_clipboard()?;
        self.handle_entropy();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            if let Err(e) = print_help() {
                log::warn!("failed to print help: {e}");
            }
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("coverpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn load_settings(&mut self) {
        if !self.flags.saved {
            return;
        }
        self.settings = Settings::load_from_file().unwrap_or_else(|e| {
            self.console
                .warn(format!("Ignoring saved settings, they could not be read: {e}"));
            Settings::default()
        });
        log::debug!("loaded settings: {:?}", self.settings);
    }

    /// Apply CLI flags on top of the base settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = Some(len);
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        self.settings.number_of_passwords = self.settings.number_of_passwords.max(1);

        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
        if self.flags.entropy {
            self.settings.show_entropy = true;
        }
    }

    fn validate(&self) -> Result<(), Exit> {
        let Some(length) = self.settings.pass_length else {
            return Ok(());
        };
        if length < coverpass::MIN_LENGTH {
            let err = coverpass::Error::InvalidLength {
                length,
                minimum: coverpass::MIN_LENGTH,
            };
            return Err(Exit::Failed(err.to_string()));
        }
        if length > MAX_LENGTH {
            return Err(Exit::Failed(format!(
                "password length {length} is too long: at most {MAX_LENGTH} characters are supported"
            )));
        }
        Ok(())
    }

    fn handle_save(&self) -> Result<(), Exit> {
        if !self.flags.save {
            return Ok(());
        }
        match self.settings.save_to_file() {
            Ok(path) => {
                self.console
                    .notice(format!("Settings saved to {}", path.display()));
                Err(Exit::Done)
            }
            Err(e) => Err(Exit::Failed(format!("Failed to save settings: {e}"))),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Exit> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                if !self.console.print_instead_of_copy() {
                    self.console.notice("Nothing generated.");
                    return Err(Exit::Done);
                }
                self.settings.to_clipboard = false;
            }
        }
        Ok(())
    }

    fn handle_entropy(&self) {
        if self.settings.show_entropy
            && !self.console.is_quiet()
            && let Err(e) = print_entropy(&self.settings)
        {
            log::warn!("failed to print entropy summary: {e}");
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let count = self.settings.number_of_passwords;
        let passwords = generate_batch(&self.settings, count)
            .map_err(|e| Exit::Failed(e.to_string()))?;

        if let (Some(clipboard), Some(passwords)) = (self.clipboard.as_mut(), passwords) {
            copy_to_clipboard(clipboard, passwords)?;
            self.console
                .notice(format!("Copied {count} password(s) to the clipboard."));
        }
        Ok(())
    }
}

/// The clipboard backend takes ownership of `passwords`; that copy lives on in
/// the clipboard and is not wiped here.
fn copy_to_clipboard<C: ClipboardProvider>(clipboard: &mut C, passwords: String) -> Result<(), Exit> {
    clipboard
        .set_contents(passwords)
        .map_err(|e| Exit::Failed(format!("Clipboard error: {e}")))
}
