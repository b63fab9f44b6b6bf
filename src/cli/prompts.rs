//! Centralized warning and status messages for CLI output.

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard confirmation - suppressed in quiet mode
pub fn clipboard_copied(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{GREEN}*** {msg} ***{RESET}");
    }
}

/// Print clipboard error - NOT suppressed, generated passwords are unaffected
pub fn clipboard_error(err: &str) {
    eprintln!("{RED}{err}{RESET}");
}

pub fn interactive_needs_tty() {
    warn("Interactive mode needs a terminal; skipping copy menu.");
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
