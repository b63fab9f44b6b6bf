//! CLI context - bundles settings, flags, and output handling.

use std::io;

use copypasta::ClipboardContext;

use super::{CliFlags, help, prompts, quiet};
use crate::error::Result;
use crate::pass::output::{self, Selection};
use crate::pass::{GeneratedPassword, Generator, generate_batch};
use crate::rand::{Jitter, Urandom};
use crate::settings::{CopyMode, Settings, default_path};

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    jitter: Jitter,
}

impl Context {
    /// Parse arguments and resolve the effective settings.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let mut settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        apply_flags(&mut settings, &flags);

        Ok(Self {
            settings,
            flags,
            jitter: Jitter::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            help::print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("entropass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        // Only settings that can drive a run are persisted.
        let alphabet = self.settings.validate()?;
        if self.flags.save {
            match self.settings.save_to_file() {
                Ok(()) => prompts::settings_saved(&default_path().display().to_string()),
                Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
            }
        }

        let charset_size = alphabet.size();
        let mut generator = Generator::new(alphabet, Urandom::open()?);

        tracing::info!(
            entropy_bits = self.settings.entropy_bits,
            count = self.settings.number_of_passwords,
            charset_size,
            "generating passwords"
        );
        let passwords = generate_batch(
            &mut generator,
            self.settings.number_of_passwords,
            self.settings.entropy_bits,
        )?;

        self.show(&passwords, charset_size);
        self.handle_copy(&passwords);
        Ok(())
    }

    fn show(&self, passwords: &[GeneratedPassword], charset_size: usize) {
        if self.settings.plain {
            let stdout = io::stdout();
            if let Err(e) = output::write_plain(stdout.lock(), passwords) {
                // Usually a closed pipe; the passwords are simply not shown.
                tracing::debug!("stdout write failed: {e}");
            }
        } else {
            output::print_cards(passwords, self.settings.entropy_bits, charset_size);
        }
    }

    fn handle_copy(&mut self, passwords: &[GeneratedPassword]) {
        let selection = match self.settings.copy {
            CopyMode::None => None,
            CopyMode::All => Some(Selection::All),
            CopyMode::Random => Some(Selection::Random),
        };
        let menu = self.settings.interactive && !self.settings.plain;
        if selection.is_none() && !menu {
            return;
        }

        let mut clipboard = match ClipboardContext::new() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
                prompts::clipboard_error(&format!("Clipboard unavailable: {e}"));
                return;
            }
        };

        if let Some(selection) = selection {
            match output::copy(&mut clipboard, passwords, selection, &mut self.jitter) {
                Ok(message) => prompts::clipboard_copied(message),
                Err(e) => {
                    tracing::warn!("clipboard copy failed: {e}");
                    prompts::clipboard_error(&e.to_string());
                }
            }
        }

        if menu {
            if !(quiet::stdin_is_tty() && quiet::stdout_is_tty()) {
                prompts::interactive_needs_tty();
                return;
            }
            if let Err(e) = output::interactive(&mut clipboard, passwords, &mut self.jitter) {
                let message = menu_failed_message(&e);
                tracing::warn!("{message}");
                prompts::warn(&message);
            }
        }
    }
}

fn menu_failed_message(err: &io::Error) -> String {
    format!("Interactive menu failed: {err}")
}

/// Apply CLI flags on top of base settings.
pub fn apply_flags(settings: &mut Settings, flags: &CliFlags) {
    if let Some(bits) = flags.entropy {
        settings.entropy_bits = bits;
    }
    if let Some(n) = flags.number {
        settings.number_of_passwords = n;
    }
    if let Some(ref symbols) = flags.symbols {
        settings.symbols = symbols.clone();
    }
    if flags.board {
        settings.copy = CopyMode::All;
    }
    if flags.random {
        settings.copy = CopyMode::Random;
    }
    if flags.plain {
        settings.plain = true;
    }
    if flags.interactive {
        settings.interactive = true;
    }
}
