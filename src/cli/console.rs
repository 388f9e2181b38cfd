//! Everything the CLI says besides the passwords themselves.
//!
//! All of it goes to stderr, so stdout carries passwords only. `-q` silences
//! notices and warnings but never errors.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::style::{Stylize, style};
use crossterm::tty::IsTty;

/// Red, on stderr, regardless of `-q`.
pub fn error(msg: impl Display) {
    eprintln!("{}", style(msg).red());
}

/// Message sink for one run, carrying the `-q` choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn warn(&self, msg: impl Display) {
        if !self.quiet {
            eprintln!("{}", style(msg).yellow());
        }
    }

    pub fn notice(&self, msg: impl Display) {
        if !self.quiet {
            eprintln!("{msg}");
        }
    }

    /// Asks whether to print the passwords when no clipboard could be opened.
    /// Quiet runs and runs without a terminal on stdin print without asking.
    pub fn print_instead_of_copy(&self) -> bool {
        let stdin = io::stdin();
        if self.quiet || !stdin.is_tty() {
            return true;
        }
        let stderr = io::stderr();
        ask(
            &mut stdin.lock(),
            &mut stderr.lock(),
            "No clipboard available. Print the passwords here instead? [Y/n] ",
        )
    }
}

/// Yes/no question defaulting to yes. Closed or unreadable input is a yes.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> bool {
    if let Err(e) = write!(out, "{question}").and_then(|()| out.flush()) {
        log::debug!("could not show prompt: {e}");
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => true,
        Ok(_) => matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "" | "y" | "yes"
        ),
    }
}
