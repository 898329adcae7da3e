use crate::pass::ClassSet;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub classes: ClassSet,
    /// Raw length text; validated together with the classes.
    pub length: Option<String>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// True when any class flag was given, so saved classes are ignored.
    pub fn has_class_flags(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Passwords to produce: `-n`, or one.
    pub fn count(&self) -> usize {
        self.number.unwrap_or(1)
    }
}
