//! Password generation.

use rand::Rng;
use zeroize::Zeroize;

use super::charset::{self, ClassSet};

/// Generate a password of `length` characters drawn from the enabled classes.
///
/// Each position is sampled independently and uniformly over the combined
/// alphabet. No validation happens here: a zero length or an empty class set
/// yields an empty string.
pub fn generate<R: Rng + ?Sized>(length: usize, classes: ClassSet, rng: &mut R) -> String {
    let mut chars = charset::build(classes);
    if chars.is_empty() {
        return String::new();
    }

    let password: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    log::debug!(
        "generated {} chars from a {} char alphabet",
        length,
        chars.len()
    );
    chars.zeroize();
    password
}

/// Estimated entropy of a password in bits.
pub fn entropy_bits(length: usize, classes: ClassSet) -> f64 {
    let size = charset::size(classes);
    if size == 0 {
        return 0.0;
    }
    length as f64 * (size as f64).log2()
}

/// Strength label for an entropy estimate.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharacterClass::{self, *};

    fn set(classes: &[CharacterClass]) -> ClassSet {
        classes.iter().copied().collect()
    }

    fn in_alphabet(password: &str, classes: ClassSet) -> bool {
        let alphabet = charset::build(classes);
        password.chars().all(|c| alphabet.contains(&c))
    }

    #[test]
    fn length_matches_request() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [1, 2, 8, 33, 256] {
            let password = generate(length, set(&[Uppercase, Lowercase]), &mut rng);
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn upper_and_digits_only() {
        let mut rng = StdRng::seed_from_u64(42);
        let password = generate(10, set(&[Uppercase, Digits]), &mut rng);
        assert_eq!(password.len(), 10);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn lower_symbols_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let classes = set(&[Lowercase, Symbols, Digits]);
        let password = generate(8, classes, &mut rng);
        assert_eq!(password.len(), 8);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "!@#$%^&*()".contains(c))
        );
    }

    #[test]
    fn every_char_in_union_alphabet() {
        let mut rng = StdRng::seed_from_u64(99);
        for classes in [
            set(&[Uppercase, Lowercase]),
            set(&[Digits, Symbols]),
            set(&[Lowercase, Digits, Symbols]),
            ClassSet::all(),
        ] {
            let password = generate(500, classes, &mut rng);
            assert!(in_alphabet(&password, classes));
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(0, ClassSet::all(), &mut rng), "");
    }

    #[test]
    fn empty_class_set_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(12, ClassSet::empty(), &mut rng), "");
    }

    #[test]
    fn repeated_calls_differ() {
        let mut rng = rand::thread_rng();
        let a = generate(32, ClassSet::all(), &mut rng);
        let b = generate(32, ClassSet::all(), &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_same_password() {
        let a = generate(20, ClassSet::all(), &mut StdRng::seed_from_u64(5));
        let b = generate(20, ClassSet::all(), &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn every_symbol_reachable() {
        // 10 symbols, 2000 draws: missing one is vanishingly unlikely
        let mut rng = StdRng::seed_from_u64(11);
        let classes = set(&[Digits, Symbols]);
        let password = generate(2000, classes, &mut rng);
        for c in charset::build(classes) {
            assert!(password.contains(c), "never drew {c:?}");
        }
    }

    #[test]
    fn entropy_estimate() {
        assert_eq!(entropy_bits(10, ClassSet::empty()), 0.0);
        let bits = entropy_bits(16, set(&[Uppercase, Lowercase]));
        assert!((bits - 16.0 * 52f64.log2()).abs() < 1e-9);
        assert_eq!(strength(20.0), "Weak");
        assert_eq!(strength(bits), "Strong");
        assert_eq!(strength(200.0), "Very Strong");
    }
}
