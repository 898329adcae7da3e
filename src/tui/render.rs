//! Drawing the form.

use crate::pass::CharacterClass;
use crate::terminal::{
    DIM, GREEN, RED, RESET, REVERSE, YELLOW, box_bottom, box_line, box_rule, box_secret_row,
    box_top, clear, flush, hide_cursor,
};

use super::state::{Focus, FormState, MessageKind};

const LABEL_WIDTH: usize = 12;
const FIELD_WIDTH: usize = 10;

pub fn draw(state: &FormState) {
    clear();
    hide_cursor();
    box_top("Password Generator");
    for line in field_lines(state) {
        box_line(&line);
    }
    box_line("");
    {
        let stdout = std::io::stdout();
        let _ = box_secret_row(&mut stdout.lock(), &label("Password"), &state.password);
    }
    box_line("");
    box_line(&button_line(state));
    box_rule();
    box_line(&message_line(state));
    box_bottom();
    print!(
        "{DIM} Tab/\u{2191}\u{2193} move \u{2022} Space toggle \u{2022} Enter activate \u{2022} Ctrl+S save \u{2022} Esc quit{RESET}\r\n"
    );
    flush();
}

fn highlight(text: &str, focused: bool) -> String {
    if focused {
        format!("{REVERSE}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn label(text: &str) -> String {
    format!("{:<LABEL_WIDTH$}", format!("{text}:"))
}

pub(super) fn field_lines(state: &FormState) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);

    let length = format!("[{:<FIELD_WIDTH$}]", state.input.length);
    lines.push(format!(
        "{}{}",
        label("Length"),
        highlight(&length, state.focus == Focus::Length)
    ));

    for class in CharacterClass::ALL {
        let mark = if state.input.classes.contains(class) {
            "[x]"
        } else {
            "[ ]"
        };
        lines.push(format!(
            "{}{}",
            label(class.label()),
            highlight(mark, state.focus == Focus::Class(class))
        ));
    }
    lines
}

pub(super) fn button_line(state: &FormState) -> String {
    format!(
        "{}{}  {}",
        " ".repeat(LABEL_WIDTH),
        highlight("< Copy password >", state.focus == Focus::Copy),
        highlight("< Generate password >", state.focus == Focus::Generate)
    )
}

pub(super) fn message_line(state: &FormState) -> String {
    match &state.message {
        None => String::new(),
        Some(message) => {
            let color = match message.kind {
                MessageKind::Info => GREEN,
                MessageKind::Warning => YELLOW,
                MessageKind::Error => RED,
            };
            format!("{color}{}{RESET}", message.text)
        }
    }
}
