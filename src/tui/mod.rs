//! Interactive terminal form.

mod render;
mod state;

use crossterm::event::{self, Event, KeyEventKind};

use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::terminal::{RED, RESET, RawModeGuard, reset_terminal};

use state::{Action, FormState};

/// Run the form until the user quits.
pub fn run() {
    if let Err(e) = run_form() {
        reset_terminal();
        eprintln!("{RED}{e}{RESET}");
        std::process::exit(e.exit_code());
    }
}

fn run_form() -> Result<()> {
    let defaults = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {}", e);
        Settings::default()
    });

    let mut state = FormState::new(defaults.to_form_input());
    let mut clipboard: Option<Clipboard> = None;
    let mut rng = rand::thread_rng();
    let mut guard = RawModeGuard::new()?;

    loop {
        render::draw(&state);

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match state.handle_key(key) {
            Action::None => {}
            Action::Quit => break,
            Action::Generate => state.generate(&mut rng),
            Action::Copy => state.copy_with(|text| open_clipboard(&mut clipboard)?.copy(text)),
            Action::Save => {
                let saved = state
                    .defaults()
                    .and_then(|s| s.save_to_file().map_err(Error::from));
                match saved {
                    Ok(()) => state.show_info(format!(
                        "Defaults saved to {}",
                        Settings::default_path().display()
                    )),
                    Err(e) => state.show_error(&e),
                }
            }
        }
    }

    guard.release();
    Ok(())
}

/// Clipboard contexts are kept for the whole session; on X11 dropping one
/// gives up the selection.
fn open_clipboard(slot: &mut Option<Clipboard>) -> Result<&mut Clipboard> {
    if slot.is_none() {
        *slot = Some(Clipboard::new()?);
    }
    slot.as_mut()
        .ok_or_else(|| Error::Clipboard("unavailable".to_string()))
}
