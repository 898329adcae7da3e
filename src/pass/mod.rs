//! Password generation.

pub mod charset;
mod generate;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{entropy_bits, generate, strength};
