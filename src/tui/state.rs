//! Form state and key handling, independent of the terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::form::{self, FormInput};
use crate::pass::{self, CharacterClass};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Class(CharacterClass),
    Copy,
    Generate,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Length,
        Focus::Class(CharacterClass::Uppercase),
        Focus::Class(CharacterClass::Lowercase),
        Focus::Class(CharacterClass::Digits),
        Focus::Class(CharacterClass::Symbols),
        Focus::Copy,
        Focus::Generate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Generate,
    Copy,
    Save,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

pub struct FormState {
    pub input: FormInput,
    /// Read-only result field. Empty until the first successful generate.
    pub password: String,
    pub focus: Focus,
    pub message: Option<Message>,
}

impl FormState {
    /// Focus starts on the length field.
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            password: String::new(),
            focus: Focus::Length,
            message: None,
        }
    }

    /// Apply a key to the form. Editing and focus changes happen here;
    /// anything needing I/O or randomness comes back as an [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('g') if ctrl => return Action::Generate,
            KeyCode::Char('y') if ctrl => return Action::Copy,
            KeyCode::Char('s') if ctrl => return Action::Save,
            KeyCode::Char('u') if ctrl => {
                if self.focus == Focus::Length {
                    self.input.length.clear();
                }
                return Action::None;
            }
            KeyCode::Esc => return Action::Quit,
            KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => {}
        }

        match (self.focus, key.code) {
            (Focus::Length, KeyCode::Enter) => Action::Generate,
            (Focus::Length, KeyCode::Backspace) => {
                self.input.length.pop();
                Action::None
            }
            (Focus::Length, KeyCode::Char(c)) if !ctrl => {
                self.input.length.push(c);
                Action::None
            }
            (Focus::Class(class), KeyCode::Enter | KeyCode::Char(' ')) => {
                self.input.classes.toggle(class);
                Action::None
            }
            (Focus::Copy, KeyCode::Right) => {
                self.focus = Focus::Generate;
                Action::None
            }
            (Focus::Generate, KeyCode::Left) => {
                self.focus = Focus::Copy;
                Action::None
            }
            (Focus::Copy, KeyCode::Enter | KeyCode::Char(' ')) => Action::Copy,
            (Focus::Generate, KeyCode::Enter | KeyCode::Char(' ')) => Action::Generate,
            _ => Action::None,
        }
    }

    /// Validate and generate. On error the previous password stays.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match form::submit(&self.input, rng) {
            Ok(mut outcome) => {
                self.password.zeroize();
                self.password = std::mem::take(&mut outcome.password);
                self.message = Some(match outcome.warning {
                    Some(warning) => Message {
                        kind: MessageKind::Warning,
                        text: warning.to_string(),
                    },
                    None => {
                        let bits = outcome.request.entropy_bits();
                        Message {
                            kind: MessageKind::Info,
                            text: format!("Entropy: {:.1} bits ({})", bits, pass::strength(bits)),
                        }
                    }
                });
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Hand the displayed password to `copy`.
    pub fn copy_with<F>(&mut self, copy: F)
    where
        F: FnOnce(&str) -> Result<()>,
    {
        if self.password.is_empty() {
            self.message = Some(Message {
                kind: MessageKind::Error,
                text: "Nothing to copy yet. Generate a password first.".to_string(),
            });
            return;
        }
        match copy(&self.password) {
            Ok(()) => {
                self.message = Some(Message {
                    kind: MessageKind::Info,
                    text: "Copied to clipboard.".to_string(),
                })
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Current selection as saveable defaults, if it validates.
    pub fn defaults(&self) -> Result<Settings> {
        let validated = form::validate(&self.input)?;
        Ok(Settings {
            pass_length: validated.request.length(),
            classes: validated.request.classes(),
        })
    }

    /// Green status line.
    pub fn show_info(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            kind: MessageKind::Info,
            text: text.into(),
        });
    }

    /// Red status line with the error's message.
    pub fn show_error(&mut self, err: &Error) {
        self.message = Some(Message {
            kind: MessageKind::Error,
            text: err.to_string(),
        });
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::ClassSet;
    use CharacterClass::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state(length: &str, classes: &[CharacterClass]) -> FormState {
        FormState::new(FormInput::new(length, classes.iter().copied().collect()))
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut s = state("", &[]);
        assert_eq!(s.focus, Focus::Length);
        s.handle_key(key(KeyCode::Up));
        assert_eq!(s.focus, Focus::Generate);
        s.handle_key(key(KeyCode::Tab));
        assert_eq!(s.focus, Focus::Length);
        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.focus, Focus::Class(Uppercase));
    }

    #[test]
    fn typing_edits_length() {
        let mut s = state("1", &[]);
        s.handle_key(key(KeyCode::Char('2')));
        s.handle_key(key(KeyCode::Char('x')));
        assert_eq!(s.input.length, "12x");
        s.handle_key(key(KeyCode::Backspace));
        assert_eq!(s.input.length, "12");
        s.handle_key(ctrl('u'));
        assert_eq!(s.input.length, "");
    }

    #[test]
    fn space_toggles_focused_class() {
        let mut s = state("12", &[]);
        s.handle_key(key(KeyCode::Down));
        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.handle_key(key(KeyCode::Char(' '))), Action::None);
        assert!(s.input.classes.contains(Lowercase));
        s.handle_key(key(KeyCode::Enter));
        assert!(!s.input.classes.contains(Lowercase));
    }

    #[test]
    fn buttons_and_shortcuts() {
        let mut s = state("12", &[]);
        s.focus = Focus::Copy;
        assert_eq!(s.handle_key(key(KeyCode::Enter)), Action::Copy);
        s.handle_key(key(KeyCode::Right));
        assert_eq!(s.focus, Focus::Generate);
        assert_eq!(s.handle_key(key(KeyCode::Enter)), Action::Generate);
        assert_eq!(s.handle_key(ctrl('g')), Action::Generate);
        assert_eq!(s.handle_key(ctrl('y')), Action::Copy);
        assert_eq!(s.handle_key(ctrl('s')), Action::Save);
        assert_eq!(s.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(s.handle_key(ctrl('c')), Action::Quit);
    }

    #[test]
    fn enter_in_length_generates() {
        let mut s = state("12", &[]);
        assert_eq!(s.handle_key(key(KeyCode::Enter)), Action::Generate);
    }

    #[test]
    fn generate_fills_password() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut s = state("10", &[Uppercase, Digits]);
        s.generate(&mut rng);
        assert_eq!(s.password.len(), 10);
        let message = s.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Info);
        assert!(message.text.starts_with("Entropy:"));
    }

    #[test]
    fn short_length_shows_warning_and_still_generates() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut s = state("5", &[Uppercase, Digits]);
        s.generate(&mut rng);
        assert_eq!(s.password.len(), 5);
        assert_eq!(s.message.as_ref().unwrap().kind, MessageKind::Warning);
    }

    #[test]
    fn error_keeps_previous_password() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut s = state("12", &[Uppercase, Digits]);
        s.generate(&mut rng);
        let before = s.password.clone();

        s.input.classes = [Digits].into_iter().collect();
        s.generate(&mut rng);
        assert_eq!(s.password, before);
        let message = s.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert!(message.text.contains("at least two"));

        s.input.classes = ClassSet::all();
        s.input.length = "abc".into();
        s.generate(&mut rng);
        assert_eq!(s.password, before);
        assert!(s.message.as_ref().unwrap().text.contains("valid number"));
    }

    #[test]
    fn copy_requires_a_password() {
        let mut s = state("12", &[Uppercase, Digits]);
        let mut called = false;
        s.copy_with(|_| {
            called = true;
            Ok(())
        });
        assert!(!called);
        assert_eq!(s.message.as_ref().unwrap().kind, MessageKind::Error);
    }

    #[test]
    fn copy_passes_displayed_password() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut s = state("12", &[Lowercase, Symbols]);
        s.generate(&mut rng);
        let mut copied = String::new();
        s.copy_with(|text| {
            copied = text.to_string();
            Ok(())
        });
        assert_eq!(copied, s.password);
        assert_eq!(s.message.as_ref().unwrap().text, "Copied to clipboard.");

        s.copy_with(|_| Err(Error::Clipboard("no display".into())));
        assert_eq!(s.message.as_ref().unwrap().kind, MessageKind::Error);
    }

    #[test]
    fn defaults_require_valid_form() {
        let s = state("14", &[Uppercase, Symbols]);
        let settings = s.defaults().unwrap();
        assert_eq!(settings.pass_length, 14);
        assert_eq!(
            settings.classes,
            [Uppercase, Symbols].into_iter().collect::<ClassSet>()
        );
        assert!(state("14", &[Symbols]).defaults().is_err());
    }
}
