use std::env;

mod cli;
mod clipboard;
mod error;
mod exits;
mod form;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PASSFORM_LOG", "warn")).init();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    log::debug!("starting with {} argument(s)", args.len().saturating_sub(1));

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
