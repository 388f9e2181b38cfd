//! Batch password output to the terminal or a clipboard buffer.

use std::collections::TryReserveError;
use std::io::{self, Write};

use thiserror::Error;
use zeroize::Zeroize;

use crate::settings::Settings;

const BUF_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Password(#[from] coverpass::Error),
    #[error("failed to write passwords: {0}")]
    Io(#[from] io::Error),
    #[error("cannot hold that many passwords for the clipboard: {0}")]
    Memory(#[from] TryReserveError),
}

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        // Never grow past capacity, a reallocation would leave a stale copy
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// One password per the settings: fixed length, or a random one from the
/// library's default range.
pub fn generate_one(settings: &Settings) -> Result<String, coverpass::Error> {
    match settings.pass_length {
        Some(length) => coverpass::generate(length),
        None => Ok(coverpass::generate_password()),
    }
}

/// Generate `count` passwords to stdout, or into one newline-joined buffer
/// when they are headed for the clipboard.
pub fn generate_batch(settings: &Settings, count: usize) -> Result<Option<String>, OutputError> {
    if settings.to_clipboard {
        return clipboard_buffer(settings, count).map(Some);
    }
    let stdout = io::stdout();
    write_batch(settings, count, &mut SecureBufWriter::new(stdout.lock()))?;
    Ok(None)
}

fn clipboard_buffer(settings: &Settings, count: usize) -> Result<String, OutputError> {
    // Sized up front so pushing never reallocates and strands a copy
    let line_len = settings
        .pass_length
        .unwrap_or(coverpass::LENGTH_RANGE.end - 1)
        .saturating_add(1);
    let mut passwords = String::new();
    passwords.try_reserve_exact(count.saturating_mul(line_len))?;

    for _ in 0..count {
        let mut pass = generate_one(settings)?;
        passwords.push_str(&pass);
        passwords.push('\n');
        pass.zeroize();
    }
    Ok(passwords)
}

pub fn write_batch<W: Write>(
    settings: &Settings,
    count: usize,
    out: &mut W,
) -> Result<(), OutputError> {
    for _ in 0..count {
        let mut pass = generate_one(settings)?;
        pass.push('\n');
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        written?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(length: Option<usize>) -> Settings {
        Settings {
            pass_length: length,
            ..Default::default()
        }
    }

    #[test]
    fn writes_one_password_per_line() {
        let mut out = Vec::new();
        write_batch(&settings(Some(20)), 5, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.len(), 20);
            assert!(coverpass::charset::covers_all(line));
        }
    }

    #[test]
    fn random_lengths_when_unset() {
        let mut out = Vec::new();
        write_batch(&settings(None), 50, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|l| coverpass::LENGTH_RANGE.contains(&l.len())));
    }

    #[test]
    fn short_length_fails_before_writing() {
        let mut out = Vec::new();
        let err = write_batch(&settings(Some(3)), 2, &mut out).unwrap_err();
        assert!(matches!(
            err,
            OutputError::Password(coverpass::Error::InvalidLength { length: 3, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn clipboard_mode_returns_passwords() {
        let settings = Settings {
            pass_length: Some(10),
            to_clipboard: true,
            ..Default::default()
        };
        let joined = generate_batch(&settings, 3).unwrap().unwrap();
        assert_eq!(joined.lines().count(), 3);
        assert!(joined.lines().all(|l| l.len() == 10));
    }

    #[test]
    fn oversized_clipboard_batch_is_an_error() {
        let settings = Settings {
            pass_length: Some(usize::MAX),
            to_clipboard: true,
            ..Default::default()
        };
        assert!(matches!(
            generate_batch(&settings, 1),
            Err(OutputError::Memory(_))
        ));

        let settings = Settings {
            pass_length: Some(20),
            to_clipboard: true,
            ..Default::default()
        };
        assert!(matches!(
            generate_batch(&settings, usize::MAX),
            Err(OutputError::Memory(_))
        ));
    }

    #[test]
    fn secure_writer_passes_everything_through() {
        let mut sink = Vec::new();
        {
            let mut writer = SecureBufWriter::new(&mut sink);
            for _ in 0..2000 {
                writer.write_all(b"abcdefgh\n").unwrap();
            }
            writer.write_all(&[b'x'; BUF_CAPACITY * 2]).unwrap();
        }
        assert_eq!(sink.len(), 2000 * 9 + BUF_CAPACITY * 2);
        assert!(sink.ends_with(b"xx"));
    }
}
