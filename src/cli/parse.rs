use super::CliFlags;
use crate::error::Error;
use crate::pass::{CharacterClass, ClassSet};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Usage(err.to_string())
    }
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--save" => flags.save = true,
            "-U" | "--upper" => flags.classes.insert(CharacterClass::Uppercase),
            "-L" | "--lower" => flags.classes.insert(CharacterClass::Lowercase),
            "-d" | "--digits" => flags.classes.insert(CharacterClass::Digits),
            "-s" | "--symbols" => flags.classes.insert(CharacterClass::Symbols),
            "-a" | "--all" => flags.classes = ClassSet::all(),
            "-l" | "--length" => {
                // Kept as text: a bad length is a validation error, not a usage error
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                flags.length = Some(value.clone());
            }
            "-n" | "--number" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                match value.parse::<usize>() {
                    Ok(n) if n > 0 => flags.number = Some(n),
                    _ => return Err(ParseError::InvalidNumber(value.clone())),
                }
            }
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}
