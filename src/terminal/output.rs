//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Lines end in `\r\n` so the same helpers work
//! in raw mode and in cooked mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";
pub const DIM: &str = "\x1b[90m";
pub const REVERSE: &str = "\x1b[7m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Hide the cursor until [`show_cursor`].
pub fn hide_cursor() {
    print!("\x1b[?25l");
}

/// Show the cursor and flush.
pub fn show_cursor() {
    print!("\x1b[?25h");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    show_cursor();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// `┌─ Title ──────┐`
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// `│ content      │`, padded to the box width ignoring ANSI escapes.
pub fn box_line(content: &str) {
    print!("{}\r\n", pad_line(content));
}

/// Box row holding a secret. Written piecewise into `out` so no owned
/// string ever contains `secret`.
pub fn box_secret_row<W: Write + ?Sized>(out: &mut W, prefix: &str, secret: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let used = console_width(prefix) + secret.chars().count();
    let padding = inner_width.saturating_sub(used);
    write!(out, "│ {}", prefix)?;
    out.write_all(secret.as_bytes())?;
    write!(out, "{} │\r\n", " ".repeat(padding))
}

/// `├──────────────┤`
pub fn box_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// `└──────────────┘`
pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Help option row: flag column, then the description wrapped to fit.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let mut lines = wrap(desc, desc_col).into_iter();
    let first = lines.next().unwrap_or_default();
    box_line(&format!("{:<flag_col$}{}", flag, first));
    for line in lines {
        box_line(&format!("{}{}", " ".repeat(flag_col), line));
    }
}

fn pad_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width(""), 0);
    }

    #[test]
    fn padded_lines_fill_the_box() {
        let line = pad_line(&format!("{GREEN}ok{RESET}"));
        assert_eq!(console_width(&line), BOX_WIDTH);
        assert_eq!(console_width(&pad_line("")), BOX_WIDTH);
    }

    #[test]
    fn secret_row_fills_the_box() {
        let mut out = Vec::new();
        box_secret_row(&mut out, "Password:   ", "Ab3$Ab3$").unwrap();
        let row = String::from_utf8(out).unwrap();
        assert!(row.contains("Password:   Ab3$Ab3$"));
        assert!(row.ends_with(" │\r\n"));
        assert_eq!(console_width(row.trim_end()), BOX_WIDTH);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("copy the password to the clipboard instead of printing", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 20));
        assert_eq!(
            lines.join(" "),
            "copy the password to the clipboard instead of printing"
        );
    }
}
