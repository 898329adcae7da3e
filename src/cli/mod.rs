//! Non-interactive mode, driven by flags.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::error::Error;

/// Run CLI mode and exit with a status matching the outcome.
pub fn run(args: Vec<String>) {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());

    if let Err(e) = result {
        prompts::error(&e.to_string());
        if matches!(e, Error::Usage(_)) {
            prompts::usage_hint();
        }
        std::process::exit(e.exit_code());
    }
}
