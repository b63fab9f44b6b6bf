//! Readable random passwords for a minimum entropy target.
//!
//! Passwords are drawn from four character classes (lowercase, uppercase,
//! digits, symbols) using a secure random source. No two adjacent characters
//! are equal ignoring case, and no class appears more than twice in a row.
//!
//! ```no_run
//! use entropass::pass::{Alphabet, Generator};
//! use entropass::rand::Urandom;
//!
//! let mut generator = Generator::new(Alphabet::standard(), Urandom::open()?);
//! let pass = generator.generate(64.0)?;
//! println!("{} ({} bits)", pass.password(), pass.entropy());
//! # Ok::<(), entropass::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
