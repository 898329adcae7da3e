//! Saved form defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::form::FormInput;
use crate::pass::ClassSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
}

impl Settings {
    /// `$HOME/.config/passform/settings`.
    pub fn default_path() -> PathBuf {
        file::default_path()
    }

    /// Load from [`Settings::default_path`].
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    /// Save to [`Settings::default_path`].
    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    /// Missing file: defaults are written and returned. Malformed file:
    /// reset to defaults.
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    /// Starting state of the form.
    pub fn to_form_input(&self) -> FormInput {
        FormInput::new(self.pass_length.to_string(), self.classes)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            classes: ClassSet::all(),
        }
    }
}
