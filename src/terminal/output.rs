//! Terminal output utilities.
//!
//! Box drawing, password cards, ANSI helpers.

use std::io::{self, Write};
use zeroize::Zeroize;

use crate::pass::GeneratedPassword;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const REVERSE: &str = "\x1b[7m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn box_top_line(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_content_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom_line() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

pub fn box_top(title: &str) {
    println!("{}", box_top_line(title));
}

pub fn box_line(content: &str) {
    println!("{}", box_content_line(content));
}

pub fn box_bottom() {
    println!("{}", box_bottom_line());
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

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
    println!("│ {}{:<width$} │", flag_padded, first, width = desc_col);

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        println!("│ {}{:<width$} │", indent, line, width = desc_col);
    }
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Print centered text within box width.
pub fn print_centered(text: &str) {
    let width = console_width(text);
    let padding = BOX_WIDTH.saturating_sub(width) / 2;
    println!("{}{}", " ".repeat(padding), text);
}

// ============================================================================
// Password Cards
// ============================================================================

/// Strength label for an entropy estimate.
pub fn entropy_strength(bits: u32) -> &'static str {
    match bits {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Badge line shown under each password.
pub fn badges(length: usize, entropy: u32) -> String {
    format!(
        "{DIM}Length: {length}{RESET} • {RED}{entropy} bits{RESET} ({})",
        entropy_strength(entropy)
    )
}

/// Lines for one card. Passwords wider than the box wrap onto extra lines.
///
/// The returned strings hold password text; callers zeroize them after printing.
pub fn card_lines(index: usize, pass: &GeneratedPassword) -> Vec<String> {
    let mut lines = vec![box_top_line(&format!("[{}]", key_label(index)))];

    for chunk in pass.password().as_bytes().chunks(INNER_WIDTH) {
        // chunks of an ASCII password are valid UTF-8
        let text = String::from_utf8_lossy(chunk);
        lines.push(box_content_line(&text));
    }

    lines.push(box_content_line(&badges(pass.length(), pass.entropy())));
    lines.push(box_bottom_line());
    lines
}

/// Label shown on a card: its copy key `1`..`9`, then `0` for the tenth.
/// Cards past the tenth have no key and show their position.
pub fn key_label(index: usize) -> String {
    match index {
        9 => "0".to_string(),
        _ => (index + 1).to_string(),
    }
}

/// Write one card to `out`.
pub fn write_card<W: Write>(mut out: W, index: usize, pass: &GeneratedPassword) -> io::Result<()> {
    let mut lines = card_lines(index, pass);
    let res = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|()| out.flush());
    lines.zeroize();
    res
}

pub fn print_card(index: usize, pass: &GeneratedPassword) {
    let stdout = io::stdout();
    if let Err(e) = write_card(stdout.lock(), index, pass) {
        // Usually a closed pipe; the card is simply not shown.
        tracing::debug!("stdout write failed: {e}");
    }
}

/// Transient status line, green when `ok`.
pub fn notify(msg: &str, ok: bool) {
    let color = if ok { GREEN } else { RED };
    print!("\r\x1b[2K{REVERSE}{color} {msg} {RESET}");
    flush();
}
