//! Terminal output utilities.
//!
//! Box drawing and entropy estimates. Every helper writes to a caller-chosen
//! stream so summaries can go to stderr while passwords own stdout.

use std::io::{self, Write};

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(content.chars().count());
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// Centered box content line: │          content          │
pub fn box_line_center<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(content.chars().count());
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    writeln!(
        out,
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A help option with flag and description, auto-wrapping the description.
pub fn box_opt<W: Write>(out: &mut W, flag: &str, desc: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    writeln!(out, "│ {:<flag_col$}{:<desc_col$} │", flag, first)?;

    for line in lines.iter().skip(1) {
        writeln!(out, "│ {:flag_col$}{:<desc_col$} │", "", line)?;
    }
    Ok(())
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Password entropy in bits, treating every character as an independent draw.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
