//! CLI context - bundles flags and the settings location for one run.

use std::io::Write;
use std::path::PathBuf;

use rand::Rng;
use zeroize::Zeroize;

use super::{CliFlags, help, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::form::{self, FormInput, GenerationRequest};
use crate::settings::Settings;

pub struct Context {
    pub flags: CliFlags,
    settings_path: PathBuf,
}

impl Context {
    /// Parse arguments. The settings file is not touched yet.
    pub fn new(args: Vec<String>) -> Result<Self> {
        Self::with_settings_path(args, Settings::default_path())
    }

    /// Same as [`Context::new`] with an explicit settings file.
    pub fn with_settings_path(args: Vec<String>, settings_path: PathBuf) -> Result<Self> {
        let flags = super::parse(&args)?;
        Ok(Self {
            flags,
            settings_path,
        })
    }

    /// Run once: info flags, then validation, then output.
    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            help::print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        quiet::set_quiet(self.flags.quiet);

        let mut settings = Settings::load_from(&self.settings_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let input = resolve_input(&self.flags, &settings);
        let validated = form::validate(&input)?;
        if let Some(warning) = validated.warning {
            prompts::warn(&warning.to_string());
        }

        if self.flags.save {
            settings.pass_length = validated.request.length();
            settings.classes = validated.request.classes();
            match settings.save_to(&self.settings_path) {
                Ok(()) => prompts::settings_saved(&self.settings_path.display().to_string()),
                Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
            }
        }

        let count = self.flags.count();
        if self.flags.clipboard {
            copy_output(&validated.request, count)
        } else {
            print_output(&validated.request, count)
        }
    }
}

/// Flags win over saved defaults, per field.
pub fn resolve_input(flags: &CliFlags, settings: &Settings) -> FormInput {
    let length = flags
        .length
        .clone()
        .unwrap_or_else(|| settings.pass_length.to_string());
    let classes = if flags.has_class_flags() {
        flags.classes
    } else {
        settings.classes
    };
    FormInput::new(length, classes)
}

fn copy_output(request: &GenerationRequest, count: usize) -> Result<()> {
    let mut clipboard = match Clipboard::new() {
        Ok(c) => c,
        Err(e) => {
            log::debug!("{}", e);
            if prompts::clipboard_fallback_prompt("the clipboard is unavailable") {
                return print_output(request, count);
            }
            return Ok(());
        }
    };

    let mut joined = join_batch(request, count, &mut rand::thread_rng());
    let result = clipboard.copy(&joined);
    joined.zeroize();
    result?;
    prompts::clipboard_copied(count);
    Ok(())
}

/// Straight to the stdout lock, so no intermediate buffer of ours holds
/// the passwords.
fn print_output(request: &GenerationRequest, count: usize) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_batch(&mut out, request, count, &mut rand::thread_rng())?;
    out.flush()?;
    Ok(())
}

/// One password per line. Each password is zeroized after it is written.
pub fn write_batch<W, R>(out: &mut W, request: &GenerationRequest, count: usize, rng: &mut R) -> Result<()>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..count {
        let mut password = request.generate(rng);
        let written = out
            .write_all(password.as_bytes())
            .and_then(|()| out.write_all(b"\n"));
        password.zeroize();
        written?;
    }
    Ok(())
}

/// `count` passwords joined with `\n`, allocated once at its final size.
pub fn join_batch<R: Rng + ?Sized>(request: &GenerationRequest, count: usize, rng: &mut R) -> String {
    // Alphabets are ASCII, so chars and bytes agree.
    let capacity = count * request.length() + count.saturating_sub(1);
    let mut joined = String::with_capacity(capacity);
    for i in 0..count {
        if i > 0 {
            joined.push('\n');
        }
        let mut password = request.generate(rng);
        joined.push_str(&password);
        password.zeroize();
    }
    joined
}
