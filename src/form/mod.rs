//! Form input, validation, and submission.
//!
//! The terminal form and the CLI both collect raw input into a [`FormInput`],
//! which [`validate`] turns into a [`GenerationRequest`]. Selection and length
//! policy lives here so the generator stays a pure function.

mod validate;

use rand::Rng;
use zeroize::Zeroize;

use crate::error::Result;
use crate::pass::{self, ClassSet};

pub use validate::{MIN_CLASSES, RECOMMENDED_LENGTH, validate};

/// Raw form state, as typed and ticked by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub length: String,
    pub classes: ClassSet,
}

impl FormInput {
    pub fn new(length: impl Into<String>, classes: ClassSet) -> Self {
        Self {
            length: length.into(),
            classes,
        }
    }
}

/// A validated request. Only [`validate`] constructs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pass::generate(self.length, self.classes, rng)
    }

    pub fn entropy_bits(&self) -> f64 {
        pass::entropy_bits(self.length, self.classes)
    }
}

/// Non-fatal notice shown before generation proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    ShortLength { length: usize, minimum: usize },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::ShortLength { length, minimum } => write!(
                f,
                "A secure password should be at least {} characters long ({} requested).",
                minimum, length
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    pub request: GenerationRequest,
    pub warning: Option<Warning>,
}

/// Result of a successful submit. The password is zeroized on drop.
pub struct Outcome {
    pub password: String,
    pub warning: Option<Warning>,
    pub request: GenerationRequest,
}

impl Drop for Outcome {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Validate the form and, if it passes, generate one password.
pub fn submit<R: Rng + ?Sized>(input: &FormInput, rng: &mut R) -> Result<Outcome> {
    let Validated { request, warning } = validate(input)?;
    Ok(Outcome {
        password: request.generate(rng),
        warning,
        request,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::Error;
    use crate::pass::CharacterClass::*;

    fn input(length: &str, classes: &[crate::pass::CharacterClass]) -> FormInput {
        FormInput::new(length, classes.iter().copied().collect())
    }

    #[test]
    fn submit_generates_requested_length() {
        let mut rng = StdRng::seed_from_u64(8);
        let form = input("10", &[Uppercase, Digits]);
        let outcome = submit(&form, &mut rng).unwrap();
        assert_eq!(outcome.password.len(), 10);
        assert!(outcome.warning.is_none());
        assert!(
            outcome
                .password
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn submit_carries_short_length_warning() {
        let mut rng = StdRng::seed_from_u64(8);
        let form = input("4", &[Uppercase, Lowercase]);
        let outcome = submit(&form, &mut rng).unwrap();
        assert_eq!(outcome.password.len(), 4);
        assert_eq!(
            outcome.warning,
            Some(Warning::ShortLength {
                length: 4,
                minimum: 8
            })
        );
    }

    #[test]
    fn submit_does_not_generate_on_error() {
        let mut rng = StdRng::seed_from_u64(8);
        let form = input("abc", &[Uppercase, Lowercase]);
        assert!(matches!(
            submit(&form, &mut rng),
            Err(Error::InvalidLength(_))
        ));
    }

    #[test]
    fn warning_text() {
        let w = Warning::ShortLength {
            length: 3,
            minimum: 8,
        };
        assert_eq!(
            w.to_string(),
            "A secure password should be at least 8 characters long (3 requested)."
        );
    }
}
