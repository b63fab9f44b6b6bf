//! Password generation.

use std::fmt;

use zeroize::Zeroize;

use super::charset::{Alphabet, CharClass};
use crate::error::{Error, Result};
use crate::rand::{Jitter, SecureSource};

/// Longest permitted run of characters from one class.
pub const MAX_RUN: usize = 2;

/// Extra characters added on top of the minimum length, drawn from `0..=PADDING`.
pub const PADDING: usize = 2;

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 4096;

/// Bits left after the 2-bit class draw.
const INDEX_BITS: u32 = 30;

/// A generated password with its length and estimated entropy.
///
/// The password text is wiped when the value is dropped.
pub struct GeneratedPassword {
    password: String,
    length: usize,
    entropy: u32,
}

impl GeneratedPassword {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// `floor(length * log2(alphabet size))`
    pub fn entropy(&self) -> u32 {
        self.entropy
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("password", &"<redacted>")
            .field("length", &self.length)
            .field("entropy", &self.entropy)
            .finish()
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[derive(Default)]
struct GenerationState {
    last_char: Option<u8>,
    last_class: Option<CharClass>,
    consecutive: usize,
}

impl GenerationState {
    fn accepts(&self, byte: u8, class: CharClass) -> bool {
        let Some(last) = self.last_char else {
            return true;
        };
        if byte.eq_ignore_ascii_case(&last) {
            return false;
        }
        !(self.last_class == Some(class) && self.consecutive >= MAX_RUN)
    }

    fn push(&mut self, byte: u8, class: CharClass) {
        if self.last_class == Some(class) {
            self.consecutive += 1;
        } else {
            self.consecutive = 1;
        }
        self.last_char = Some(byte);
        self.last_class = Some(class);
    }
}

/// Generates readable passwords from an [`Alphabet`] and a [`SecureSource`].
///
/// Each call to [`Generator::generate`] owns its own state; nothing carries
/// over between passwords.
pub struct Generator<S> {
    alphabet: Alphabet,
    source: S,
    jitter: Jitter,
}

impl<S: SecureSource> Generator<S> {
    pub fn new(alphabet: Alphabet, source: S) -> Self {
        Self {
            alphabet,
            source,
            jitter: Jitter::new(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Shortest length reaching `min_entropy_bits`.
    pub fn min_length(&self, min_entropy_bits: f64) -> Result<usize> {
        min_length(&self.alphabet, min_entropy_bits)
    }

    /// Whole bits of entropy for a password of `length` characters.
    pub fn entropy_for(&self, length: usize) -> u32 {
        (length as f64 * self.alphabet.bits_per_char()).floor() as u32
    }

    pub fn generate(&mut self, min_entropy_bits: f64) -> Result<GeneratedPassword> {
        let min_length = self.min_length(min_entropy_bits)?;
        let length = min_length
            .checked_add(self.jitter.below(PADDING + 1))
            .ok_or(Error::InvalidEntropyRequest(min_entropy_bits))?;
        self.generate_exact(length)
    }

    /// Generate exactly `length` characters, at most [`MAX_LENGTH`].
    pub fn generate_exact(&mut self, length: usize) -> Result<GeneratedPassword> {
        if length > MAX_LENGTH {
            return Err(Error::InvalidLength(length));
        }
        let mut password = String::with_capacity(length);
        let mut state = GenerationState::default();
        let mut rejected = 0usize;

        while password.len() < length {
            let (byte, class) = match self.candidate() {
                Ok(c) => c,
                Err(e) => {
                    password.zeroize();
                    return Err(e);
                }
            };
            if !state.accepts(byte, class) {
                rejected += 1;
                continue;
            }
            state.push(byte, class);
            password.push(byte as char);
        }

        tracing::trace!(length, rejected, "password generated");

        Ok(GeneratedPassword {
            password,
            length,
            entropy: self.entropy_for(length),
        })
    }

    /// One candidate: the low two bits of a draw pick the class, the rest
    /// pick a member of that class.
    fn candidate(&mut self) -> Result<(u8, CharClass)> {
        let draw = self.source.next_u32()?;
        let class = CharClass::ALL[(draw & 0b11) as usize];
        let members = self.alphabet.class(class);
        let index = uniform_index(&mut self.source, draw >> 2, members.len() as u32)?;
        Ok((members[index], class))
    }
}

/// Shortest length of a password over `alphabet` reaching `min_entropy_bits`.
///
/// Targets that are not positive and finite, or that need more than
/// [`MAX_LENGTH`] characters once padded, are rejected.
pub fn min_length(alphabet: &Alphabet, min_entropy_bits: f64) -> Result<usize> {
    if !min_entropy_bits.is_finite() || min_entropy_bits <= 0.0 {
        return Err(Error::InvalidEntropyRequest(min_entropy_bits));
    }
    let length = (min_entropy_bits / alphabet.bits_per_char()).ceil();
    if length > (MAX_LENGTH - PADDING) as f64 {
        return Err(Error::InvalidEntropyRequest(min_entropy_bits));
    }
    Ok(length as usize)
}

/// Maps 30-bit values onto `0..n` without modulo bias by redrawing
/// values past the last full multiple of `n`.
fn uniform_index<S: SecureSource>(source: &mut S, mut bits: u32, n: u32) -> Result<usize> {
    let span = 1u32 << INDEX_BITS;
    let zone = span - span % n;
    while bits >= zone {
        bits = source.next_u32()? >> 2;
    }
    Ok((bits % n) as usize)
}

/// Generate `count` passwords at the same entropy target.
pub fn generate_batch<S: SecureSource>(
    generator: &mut Generator<S>,
    count: usize,
    min_entropy_bits: f64,
) -> Result<Vec<GeneratedPassword>> {
    let passwords = (0..count)
        .map(|_| generator.generate(min_entropy_bits))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count, min_entropy_bits, "batch generated");
    Ok(passwords)
}
