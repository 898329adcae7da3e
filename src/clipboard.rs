//! System clipboard access, plain text only.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Handle on the system clipboard. Keep it alive while the copied text
/// should stay available.
pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    /// Fails with [`Error::Clipboard`] when no display server is reachable.
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new()
            .map_err(|e| Error::Clipboard(format!("unavailable: {}", e)))?;
        Ok(Self { ctx })
    }

    /// Place `text` on the clipboard. One attempt, no retries.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Reading back keeps some X11 providers from dropping the selection
        // before another client asks for it.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
