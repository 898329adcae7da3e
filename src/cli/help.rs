use crate::form::{MIN_CLASSES, RECOMMENDED_LENGTH};
use crate::terminal::{box_bottom, box_line, box_opt, box_top};

/// Boxed `--help` text on stdout.
pub fn print_help() {
    box_top("Passform");
    box_line("Password generator: pick classes and a length.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform              open the interactive form");
    box_line("  passform [OPTIONS]    generate without the form");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (saved default when omitted)");
    box_opt("  -U, --upper", "Uppercase letters A-Z");
    box_opt("  -L, --lower", "Lowercase letters a-z");
    box_opt("  -d, --digits", "Digits 0-9");
    box_opt("  -s, --symbols", "Symbols !@#$%^&*()");
    box_opt("  -a, --all", "All four classes");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("  -b, --board", "Copy to the clipboard instead of printing");
    box_opt("      --save", "Store length and classes as the form defaults");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("  -v, --version", "Print version");
    box_opt("  -h, --help", "Print this help");
    box_line("");
    box_line(&format!(
        "At least {} classes are required. Lengths under {} warn.",
        MIN_CLASSES, RECOMMENDED_LENGTH
    ));
    box_line("Without class flags the saved classes are used.");
    box_bottom();
}
