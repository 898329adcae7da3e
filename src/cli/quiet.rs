//! Output verbosity and prompt gating for the CLI.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Turn quiet mode on or off for the rest of the run (`-q`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// True when warnings and confirmations should be dropped.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when stdin is a terminal someone can type into.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// A y/n question may be asked: not quiet, and stdin is a terminal.
pub fn can_prompt() -> bool {
    !is_quiet() && stdin_is_tty()
}
