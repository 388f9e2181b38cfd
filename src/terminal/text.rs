//! Help and summary screens.

use std::io::{self, Write};

use coverpass::charset;

use super::{box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy, entropy_strength};
use crate::settings::Settings;

pub fn print_help() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_help(&mut out)?;
    out.flush()
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    box_top(out, "Coverpass")?;
    box_line_center(out, "Passwords with a digit, upper, lower and symbol in every one")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  coverpass [OPTIONS]")?;
    box_line(out, "")?;
    box_line(out, "OPTIONS:")?;
    box_line(out, " Password:")?;
    box_opt(out, "  -l, --length <N>", "Characters per password, at least 4 (default: random 12-16)")?;
    box_opt(out, "  -n, --number <N>", "How many to generate (default: 1)")?;
    box_line(out, "")?;
    box_line(out, " Output:")?;
    box_opt(out, "  -b, --board", "Copy to clipboard instead of printing")?;
    box_opt(out, "  -e, --entropy", "Show an entropy estimate on stderr")?;
    box_opt(out, "  -q, --quiet", "Suppress notices and warnings (errors still show)")?;
    box_line(out, "")?;
    box_line(out, " Settings:")?;
    box_opt(out, "  -s, --saved", "Start from saved settings")?;
    box_opt(out, "      --save", "Save the given flags as settings and exit")?;
    box_line(out, "")?;
    box_line(out, " Info:")?;
    box_opt(out, "  -h, --help", "Display this help message")?;
    box_opt(out, "  -v, --version", "Display version")?;
    box_line(out, "")?;
    box_line(out, "EXAMPLES:")?;
    box_line(out, "  coverpass                One password, 12-16 characters")?;
    box_line(out, "  coverpass -l 20 -n 3     Three passwords, 20 characters each")?;
    box_line(out, "  coverpass -n 5 -q        Five passwords, nothing else printed")?;
    box_line(out, "  coverpass -l 24 --save   Make 24 characters the saved default")?;
    box_line(out, "  coverpass -s -b          Saved settings, copied to clipboard")?;
    box_bottom(out)
}

/// Entropy box on stderr, so piped stdout stays clean.
pub fn print_entropy(settings: &Settings) -> io::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_entropy(&mut out, settings)
}

fn write_entropy<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    let chars = charset::pool().len();

    let (length_desc, bits_desc, strength) = match settings.pass_length {
        Some(length) => {
            let bits = calculate_entropy(length, chars);
            (
                format!("{length} chars"),
                format!("{bits:.1} bits"),
                entropy_strength(bits),
            )
        }
        None => {
            let low = calculate_entropy(coverpass::LENGTH_RANGE.start, chars);
            let high = calculate_entropy(coverpass::LENGTH_RANGE.end - 1, chars);
            (
                format!(
                    "{}-{} chars",
                    coverpass::LENGTH_RANGE.start,
                    coverpass::LENGTH_RANGE.end - 1
                ),
                format!("{low:.1}-{high:.1} bits"),
                entropy_strength(low),
            )
        }
    };

    box_top(out, "Entropy")?;
    box_line(out, &format!("\u{2248} {bits_desc} ({strength})"))?;
    box_line(out, &format!("Length: {length_desc} \u{2022} Charset: {chars} chars"))?;
    box_line(out, "Source: OS-seeded CSPRNG")?;
    box_bottom(out)
}
