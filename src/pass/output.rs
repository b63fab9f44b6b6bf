//! Password output: terminal cards, plain lines, and clipboard copy.

use std::io::{self, Write};

use copypasta::ClipboardProvider;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use zeroize::Zeroize;

use super::{GeneratedPassword, SecureBufWriter};
use crate::error::{Error, Result};
use crate::rand::Jitter;
use crate::terminal::{RawModeGuard, box_bottom, box_line, box_top, notify, print_card, print_centered};

/// What to put on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Item(usize),
    Random,
    /// Every password, newline-joined.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Copy(Selection),
    Quit,
}

/// Text for a selection and the confirmation shown once it is copied.
/// Returns `None` when the selection points at nothing.
pub fn selection_text(
    passwords: &[GeneratedPassword],
    selection: Selection,
    jitter: &mut Jitter,
) -> Option<(String, &'static str)> {
    if passwords.is_empty() {
        return None;
    }
    match selection {
        Selection::Item(i) => passwords
            .get(i)
            .map(|p| (p.password().to_string(), "Password copied to clipboard!")),
        Selection::Random => {
            let p = &passwords[jitter.below(passwords.len())];
            Some((p.password().to_string(), "Password copied to clipboard!"))
        }
        Selection::All => {
            let joined = passwords
                .iter()
                .map(GeneratedPassword::password)
                .collect::<Vec<_>>()
                .join("\n");
            Some((joined, "All passwords copied to clipboard!"))
        }
    }
}

/// Copy a selection to the clipboard. The local copy of the text is wiped
/// whether or not the clipboard accepted it.
pub fn copy<C: ClipboardProvider>(
    clipboard: &mut C,
    passwords: &[GeneratedPassword],
    selection: Selection,
    jitter: &mut Jitter,
) -> Result<&'static str> {
    let Some((mut text, message)) = selection_text(passwords, selection, jitter) else {
        return Err(Error::Clipboard("nothing to copy".to_string()));
    };

    let res = clipboard.set_contents(text.clone());
    text.zeroize();
    res.map_err(|e| Error::Clipboard(e.to_string()))?;

    tracing::debug!(?selection, "copied to clipboard");
    Ok(message)
}

/// One password per line, nothing else. For pipes and scripts.
pub fn write_plain<W: Write>(out: W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    let mut out = SecureBufWriter::new(out);
    for p in passwords {
        out.write_all(p.password().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Header box followed by one card per password.
pub fn print_cards(passwords: &[GeneratedPassword], min_entropy_bits: f64, charset_size: usize) {
    box_top("Entropy");
    box_line(&format!(
        "Target: {} bits • Charset: {} chars • {} password(s)",
        min_entropy_bits,
        charset_size,
        passwords.len()
    ));
    box_bottom();
    println!();

    for (i, p) in passwords.iter().enumerate() {
        print_card(i, p);
    }
}

/// Map a key press to a menu action. Digit keys address cards `1`..`9`
/// and `0` for the tenth.
pub fn menu_action(key: KeyEvent, count: usize) -> Option<MenuAction> {
    let is_ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if is_ctrl_c {
        return Some(MenuAction::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(MenuAction::Quit),
        KeyCode::Char('r') => Some(MenuAction::Copy(Selection::Random)),
        KeyCode::Char('a') => Some(MenuAction::Copy(Selection::All)),
        KeyCode::Char(d @ '0'..='9') => {
            let index = match d {
                '0' => 9,
                _ => (d as u8 - b'1') as usize,
            };
            (index < count).then_some(MenuAction::Copy(Selection::Item(index)))
        }
        _ => None,
    }
}

/// Key-driven copy menu under the cards. Returns when the user quits.
pub fn interactive<C: ClipboardProvider>(
    clipboard: &mut C,
    passwords: &[GeneratedPassword],
    jitter: &mut Jitter,
) -> io::Result<()> {
    println!();
    print_centered("[1-0] Copy one • [r] Random • [a] All • [q/Esc] Quit");

    let mut guard = RawModeGuard::new()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match menu_action(key, passwords.len()) {
            Some(MenuAction::Quit) => break,
            Some(MenuAction::Copy(selection)) => {
                match copy(clipboard, passwords, selection, jitter) {
                    Ok(message) => notify(message, true),
                    Err(e) => {
                        tracing::warn!("clipboard copy failed: {e}");
                        notify(&e.to_string(), false);
                    }
                }
            }
            None => {}
        }
    }

    guard.disable();
    print!("\r\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{Alphabet, Generator, generate_batch};
    use crate::rand::Urandom;

    type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

    #[derive(Default)]
    struct MockClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl ClipboardProvider for MockClipboard {
        fn get_contents(&mut self) -> std::result::Result<String, BoxError> {
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(&mut self, text: String) -> std::result::Result<(), BoxError> {
            if self.fail {
                return Err("permission denied".into());
            }
            self.contents = Some(text);
            Ok(())
        }
    }

    fn batch(count: usize) -> Vec<GeneratedPassword> {
        let mut g = Generator::new(Alphabet::standard(), Urandom::open().unwrap());
        generate_batch(&mut g, count, 40.0).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn copy_all_is_newline_joined() {
        let passwords = batch(3);
        let mut clip = MockClipboard::default();
        let msg = copy(&mut clip, &passwords, Selection::All, &mut Jitter::new()).unwrap();
        assert_eq!(msg, "All passwords copied to clipboard!");

        let expected = passwords
            .iter()
            .map(|p| p.password())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(clip.contents.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn copy_one_item() {
        let passwords = batch(3);
        let mut clip = MockClipboard::default();
        copy(&mut clip, &passwords, Selection::Item(1), &mut Jitter::new()).unwrap();
        assert_eq!(clip.contents.as_deref(), Some(passwords[1].password()));
    }

    #[test]
    fn copy_random_picks_a_member() {
        let passwords = batch(5);
        let mut clip = MockClipboard::default();
        copy(&mut clip, &passwords, Selection::Random, &mut Jitter::new()).unwrap();
        let copied = clip.contents.unwrap();
        assert!(passwords.iter().any(|p| p.password() == copied));
    }

    #[test]
    fn copy_out_of_range_or_empty_is_an_error() {
        let passwords = batch(2);
        let mut clip = MockClipboard::default();
        let mut j = Jitter::new();
        assert!(matches!(
            copy(&mut clip, &passwords, Selection::Item(5), &mut j),
            Err(Error::Clipboard(_))
        ));
        assert!(copy(&mut clip, &[], Selection::Random, &mut j).is_err());
        assert!(clip.contents.is_none());
    }

    #[test]
    fn clipboard_failure_leaves_passwords_intact() {
        let passwords = batch(2);
        let before: Vec<String> = passwords.iter().map(|p| p.password().to_string()).collect();
        let mut clip = MockClipboard {
            fail: true,
            ..Default::default()
        };
        let err = copy(&mut clip, &passwords, Selection::All, &mut Jitter::new()).unwrap_err();
        assert!(err.to_string().contains("permission denied"));
        let after: Vec<String> = passwords.iter().map(|p| p.password().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn plain_output_one_per_line() {
        let passwords = batch(4);
        let mut out = Vec::new();
        write_plain(&mut out, &passwords).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for (line, p) in lines.iter().zip(&passwords) {
            assert_eq!(*line, p.password());
        }
    }

    #[test]
    fn menu_keys() {
        assert_eq!(
            menu_action(key(KeyCode::Char('1')), 10),
            Some(MenuAction::Copy(Selection::Item(0)))
        );
        assert_eq!(
            menu_action(key(KeyCode::Char('0')), 10),
            Some(MenuAction::Copy(Selection::Item(9)))
        );
        assert_eq!(menu_action(key(KeyCode::Char('0')), 9), None);
        assert_eq!(menu_action(key(KeyCode::Char('4')), 3), None);
        assert_eq!(
            menu_action(key(KeyCode::Char('r')), 3),
            Some(MenuAction::Copy(Selection::Random))
        );
        assert_eq!(
            menu_action(key(KeyCode::Char('a')), 3),
            Some(MenuAction::Copy(Selection::All))
        );
        assert_eq!(menu_action(key(KeyCode::Esc), 3), Some(MenuAction::Quit));
        assert_eq!(
            menu_action(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                3
            ),
            Some(MenuAction::Quit)
        );
        assert_eq!(menu_action(key(KeyCode::Char('x')), 3), None);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn card_write_errors_are_returned() {
        let passwords = batch(1);
        let err = crate::terminal::write_card(BrokenPipe, 0, &passwords[0]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut out = Vec::new();
        crate::terminal::write_card(&mut out, 0, &passwords[0]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(passwords[0].password()));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn cards_wrap_long_passwords() {
        let mut g = Generator::new(Alphabet::standard(), Urandom::open().unwrap());
        let p = g.generate_exact(100).unwrap();
        let lines = crate::terminal::card_lines(0, &p);
        // top, two password lines, badges, bottom
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains(&p.password()[..70]));
        assert!(lines[2].contains(&p.password()[70..]));
        assert!(lines[3].contains("Length: 100"));
    }
}
