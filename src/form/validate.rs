use super::{FormInput, GenerationRequest, Validated, Warning};
use crate::error::{Error, Result};

/// Fewest classes the form accepts.
pub const MIN_CLASSES: usize = 2;

/// Shorter lengths are accepted with a warning.
pub const RECOMMENDED_LENGTH: usize = 8;

/// Check the class selection first, then the length.
pub fn validate(input: &FormInput) -> Result<Validated> {
    let selected = input.classes.len();
    if selected < MIN_CLASSES {
        return Err(Error::InsufficientSelection { selected });
    }

    let length = parse_length(&input.length)?;
    let warning = (length < RECOMMENDED_LENGTH).then_some(Warning::ShortLength {
        length,
        minimum: RECOMMENDED_LENGTH,
    });
    if let Some(w) = warning {
        log::debug!("validation warning: {:?}", w);
    }

    Ok(Validated {
        request: GenerationRequest {
            length,
            classes: input.classes,
        },
        warning,
    })
}

fn parse_length(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(Error::InvalidLength(text.to_string())),
        Ok(n) => Ok(n),
    }
}
