//! Character classes and the alphabet passwords are drawn from.

use crate::error::{Error, Result};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Reference symbol set (32 characters).
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?\"'/\\`~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    /// Selection order; a 2-bit draw indexes into this.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];
}

/// Four disjoint character classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Alphabet {
    pub fn standard() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.as_bytes().to_vec(),
        }
    }

    /// Build an alphabet with a custom symbol class.
    ///
    /// Symbols must be printable, non-alphanumeric ASCII without duplicates,
    /// and there must be at least two so that excluding the previous
    /// character never empties the class.
    pub fn with_symbols(symbols: &str) -> Result<Self> {
        let mut set: Vec<u8> = Vec::with_capacity(symbols.len());

        for c in symbols.chars() {
            if !c.is_ascii_graphic() || c.is_ascii_alphanumeric() {
                return Err(Error::InvalidSymbols(format!(
                    "{c:?} is not a printable ASCII symbol"
                )));
            }
            let b = c as u8;
            if set.contains(&b) {
                return Err(Error::InvalidSymbols(format!("{c:?} appears twice")));
            }
            set.push(b);
        }

        if set.len() < 2 {
            return Err(Error::InvalidSymbols(
                "at least 2 symbols are required".to_string(),
            ));
        }

        Ok(Self { symbols: set })
    }

    pub fn class(&self, class: CharClass) -> &[u8] {
        match class {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => &self.symbols,
        }
    }

    pub fn class_of(&self, byte: u8) -> Option<CharClass> {
        CharClass::ALL
            .into_iter()
            .find(|&class| self.class(class).contains(&byte))
    }

    /// Total alphabet size, summed from the classes.
    pub fn size(&self) -> usize {
        CharClass::ALL.iter().map(|&c| self.class(c).len()).sum()
    }

    /// Entropy contributed by one uniformly chosen character.
    pub fn bits_per_char(&self) -> f64 {
        (self.size() as f64).log2()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_sizes() {
        let a = Alphabet::standard();
        assert_eq!(a.class(CharClass::Lower).len(), 26);
        assert_eq!(a.class(CharClass::Upper).len(), 26);
        assert_eq!(a.class(CharClass::Digit).len(), 10);
        assert_eq!(a.class(CharClass::Symbol).len(), 32);
        assert_eq!(a.size(), 94);
    }

    #[test]
    fn size_follows_symbol_set() {
        let a = Alphabet::with_symbols("!@#").unwrap();
        assert_eq!(a.size(), 65);
        assert!((a.bits_per_char() - 65f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn classes_are_disjoint() {
        let a = Alphabet::standard();
        for class in CharClass::ALL {
            for &b in a.class(class) {
                assert_eq!(a.class_of(b), Some(class), "byte {:?}", b as char);
            }
        }
        assert_eq!(a.class_of(b' '), None);
    }

    #[test]
    fn rejects_bad_symbols() {
        assert!(matches!(
            Alphabet::with_symbols("!a"),
            Err(Error::InvalidSymbols(_))
        ));
        assert!(matches!(
            Alphabet::with_symbols("!!"),
            Err(Error::InvalidSymbols(_))
        ));
        assert!(matches!(
            Alphabet::with_symbols("!"),
            Err(Error::InvalidSymbols(_))
        ));
        assert!(matches!(
            Alphabet::with_symbols("! "),
            Err(Error::InvalidSymbols(_))
        ));
        assert!(Alphabet::with_symbols("é!").is_err());
    }
}
