//! Settings file persistence.
//!
//! One line: `length,uppercase,lowercase,digits,symbols`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::CharacterClass;

const FIELDS: usize = 1 + CharacterClass::ALL.len();

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut data = settings.pass_length.to_string();
    for class in CharacterClass::ALL {
        data.push(',');
        data.push_str(if settings.classes.contains(class) {
            "true"
        } else {
            "false"
        });
    }
    data.push('\n');

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        log::warn!(
            "malformed settings at {} ({} fields), resetting",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.pass_length = match parts[0].parse() {
        Ok(0) | Err(_) => settings.pass_length,
        Ok(n) => n,
    };
    for (class, part) in CharacterClass::ALL.into_iter().zip(&parts[1..]) {
        let enabled = part.parse().unwrap_or(settings.classes.contains(class));
        settings.classes.set(class, enabled);
    }

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passform/settings")
}
