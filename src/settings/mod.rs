//! Generation and output settings.

mod file;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Result;
use crate::pass::charset::DEFAULT_SYMBOLS;
use crate::pass::{Alphabet, min_length};

pub use file::{SETTINGS_ENV, default_path};

/// Upper bound on passwords per run.
pub const MAX_PASSWORDS: usize = 10_000;

/// What to put on the clipboard right after generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    #[default]
    None,
    All,
    Random,
}

impl fmt::Display for CopyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CopyMode::None => "none",
            CopyMode::All => "all",
            CopyMode::Random => "random",
        })
    }
}

impl FromStr for CopyMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "none" => Ok(CopyMode::None),
            "all" => Ok(CopyMode::All),
            "random" => Ok(CopyMode::Random),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub entropy_bits: f64,
    pub number_of_passwords: usize,
    pub symbols: String,
    pub copy: CopyMode,
    pub plain: bool,
    pub interactive: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(default_path())
    }

    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, &path.into())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(default_path())
    }

    pub fn save_to(&self, path: impl Into<PathBuf>) -> Result<()> {
        file::save(self, &path.into())
    }

    /// Check that these settings can drive a generation run.
    pub fn validate(&self) -> Result<Alphabet> {
        let alphabet = Alphabet::with_symbols(&self.symbols)?;
        min_length(&alphabet, self.entropy_bits)?;
        Ok(alphabet)
    }
}

fn valid_count(n: usize) -> bool {
    (1..=MAX_PASSWORDS).contains(&n)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entropy_bits: 64.0,
            number_of_passwords: 10,
            symbols: DEFAULT_SYMBOLS.to_string(),
            copy: CopyMode::None,
            plain: false,
            interactive: false,
        }
    }
}
