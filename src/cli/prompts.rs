//! User-facing CLI messages and the clipboard fallback question.
//!
//! Passwords go to stdout; everything here except confirmations goes to
//! stderr so piping the output stays clean.

use std::io::{BufRead, Write};

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Print a yellow notice on stderr unless quiet.
pub fn warn(msg: &str) {
    if quiet::is_quiet() {
        return;
    }
    eprintln!("{YELLOW}warning:{RESET} {msg}");
}

/// Print a red error on stderr. Quiet mode does not hide errors.
pub fn error(msg: &str) {
    eprintln!("{RED}error:{RESET} {msg}");
}

/// Point at `--help` after a usage error.
pub fn usage_hint() {
    eprintln!("Run `passform --help` for the list of options.");
}

/// Confirm a clipboard copy on stdout unless quiet.
pub fn clipboard_copied(count: usize) {
    if quiet::is_quiet() {
        return;
    }
    let noun = if count == 1 { "password" } else { "passwords" };
    println!("Copied {count} {noun} to the clipboard.");
}

/// Confirm where `--save` wrote the defaults, unless quiet.
pub fn settings_saved(path: &str) {
    if !quiet::is_quiet() {
        println!("Defaults saved \u{2192} {path}");
    }
}

/// `reason` names what went wrong; the question offers printing instead.
/// Returns true to print. Without a terminal to ask (or when quiet) the
/// answer is yes.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if !quiet::can_prompt() {
        return true;
    }
    let question = format!("{YELLOW}{reason}{RESET}: print the password(s) here instead?");
    let stdin = std::io::stdin();
    let answer = ask_yes_no(&question, true, &mut stdin.lock());
    if !answer {
        eprintln!("Nothing copied, nothing printed.");
    }
    answer
}

/// Ask on stderr and read one line from `input`. An empty line, EOF or a
/// read error picks `default`.
fn ask_yes_no<R: BufRead>(question: &str, default: bool, input: &mut R) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    eprint!("{question} {hint} ");
    let _ = std::io::stderr().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => default,
        Ok(_) => parse_answer(&line).unwrap_or(default),
    }
}

/// `y`/`yes` or `n`/`no`, any case. Anything else is no answer.
fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_case_insensitive() {
        assert_eq!(parse_answer("Y\n"), Some(true));
        assert_eq!(parse_answer(" yes "), Some(true));
        assert_eq!(parse_answer("NO"), Some(false));
        assert_eq!(parse_answer("maybe"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn empty_line_and_eof_take_the_default() {
        assert!(ask_yes_no("print?", true, &mut "\n".as_bytes()));
        assert!(!ask_yes_no("print?", false, &mut "".as_bytes()));
        assert!(!ask_yes_no("print?", true, &mut "n\n".as_bytes()));
        assert!(ask_yes_no("print?", false, &mut "yes\n".as_bytes()));
    }
}
