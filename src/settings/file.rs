//! Settings file persistence.
//!
//! One line: `length,count,clipboard,entropy`. A length of 0 stands for
//! "random".

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 4;

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/coverpass/settings")
}

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(encode(settings).as_bytes())
}

/// Missing file yields defaults; a malformed one is `InvalidData`.
pub fn load(path: &Path) -> io::Result<Settings> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e),
    };

    match contents.lines().next() {
        None => Ok(Settings::default()),
        Some(line) if line.trim().is_empty() => Ok(Settings::default()),
        Some(line) => decode(line),
    }
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{}\n",
        settings.pass_length.unwrap_or(0),
        settings.number_of_passwords,
        settings.to_clipboard,
        settings.show_entropy,
    )
}

fn decode(line: &str) -> io::Result<Settings> {
    let parts: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
    let [length, count, clipboard, entropy] = parts.as_slice() else {
        return Err(invalid(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    };

    let pass_length = match parse_field::<usize>(length, "length")? {
        0 => None,
        n => Some(n),
    };

    Ok(Settings {
        pass_length,
        number_of_passwords: parse_field(count, "count")?,
        to_clipboard: parse_field(clipboard, "clipboard")?,
        show_entropy: parse_field(entropy, "entropy")?,
    })
}

fn parse_field<T: std::str::FromStr>(value: &str, name: &str) -> io::Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(format!("bad {name} value: {value:?}")))
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}
