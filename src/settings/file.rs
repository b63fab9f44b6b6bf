//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes the next character so
//! symbol sets may contain `,` and `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{Error, Result};
use crate::pass::{Alphabet, min_length};

/// Overrides the settings file location.
pub const SETTINGS_ENV: &str = "ENTROPASS_SETTINGS";

const FIELDS: usize = 6;

pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/entropass/settings")
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(Error::Settings)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(Error::Settings)?;

    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.entropy_bits,
        settings.number_of_passwords,
        escape(&settings.symbols),
        settings.copy,
        settings.plain,
        settings.interactive,
    );

    file.write_all(data.as_bytes()).map_err(Error::Settings)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Fill `settings` from `path`. A missing or malformed file is rewritten
/// with the values already in `settings`.
pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(Error::Settings)?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(Error::Settings)?;

    let parts = split_escaped(line.trim_end_matches(['\n', '\r']), ',');
    if parts.len() != FIELDS {
        tracing::warn!(path = %path.display(), "malformed settings file, rewriting defaults");
        return save(settings, path);
    }

    // Each field falls back to its current value when unusable.
    if Alphabet::with_symbols(&parts[2]).is_ok() {
        settings.symbols = parts[2].clone();
    }
    if let Ok(bits) = parts[0].parse::<f64>()
        && let Ok(alphabet) = Alphabet::with_symbols(&settings.symbols)
        && min_length(&alphabet, bits).is_ok()
    {
        settings.entropy_bits = bits;
    }
    if let Ok(n) = parts[1].parse()
        && super::valid_count(n)
    {
        settings.number_of_passwords = n;
    }
    settings.copy = parts[3].parse().unwrap_or(settings.copy);
    settings.plain = parts[4].parse().unwrap_or(settings.plain);
    settings.interactive = parts[5].parse().unwrap_or(settings.interactive);

    Ok(())
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
