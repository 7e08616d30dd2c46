//! Fixed-length slug generation and validation.

use crate::domain::slugger::Slugger;
use rand::Rng;

/// Alphabet slugs are drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// [`Slugger`] implementation producing slugs of a fixed configured length.
///
/// Characters are drawn uniformly at random from a lowercase alphabet using
/// the process-wide thread RNG. A length of zero makes every candidate
/// invalid, which disables slug handling without panicking.
#[derive(Debug, Clone)]
pub struct FixedLenSlugger {
    length: usize,
}

impl FixedLenSlugger {
    /// Creates a new slugger producing slugs of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Slugger for FixedLenSlugger {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    fn is_valid(&self, candidate: &str) -> bool {
        if self.length == 0 {
            return false;
        }

        if candidate.len() != self.length {
            return false;
        }

        candidate.bytes().all(|b| ALPHABET.contains(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_configured_length() {
        let slugger = FixedLenSlugger::new(5);
        assert_eq!(slugger.generate().len(), 5);

        let slugger = FixedLenSlugger::new(12);
        assert_eq!(slugger.generate().len(), 12);
    }

    #[test]
    fn test_generate_uses_lowercase_alphabet() {
        let slugger = FixedLenSlugger::new(64);
        let slug = slugger.generate();

        assert!(slug.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_is_accepted_by_is_valid() {
        let slugger = FixedLenSlugger::new(5);

        for _ in 0..100 {
            let slug = slugger.generate();
            assert!(slugger.is_valid(&slug), "generated slug '{}' invalid", slug);
        }
    }

    #[test]
    fn test_generate_rarely_repeats() {
        let slugger = FixedLenSlugger::new(10);
        let mut slugs = HashSet::new();

        for _ in 0..1000 {
            slugs.insert(slugger.generate());
        }

        assert_eq!(slugs.len(), 1000);
    }

    #[test]
    fn test_is_valid_accepts_exact_length_lowercase() {
        let slugger = FixedLenSlugger::new(5);
        assert!(slugger.is_valid("pizza"));
        assert!(slugger.is_valid("abcde"));
    }

    #[test]
    fn test_is_valid_rejects_wrong_length() {
        let slugger = FixedLenSlugger::new(5);
        assert!(!slugger.is_valid(""));
        assert!(!slugger.is_valid("abcd"));
        assert!(!slugger.is_valid("abcdef"));
    }

    #[test]
    fn test_is_valid_rejects_foreign_characters() {
        let slugger = FixedLenSlugger::new(5);
        assert!(!slugger.is_valid("abcd1"));
        assert!(!slugger.is_valid("ABCDE"));
        assert!(!slugger.is_valid("ab-de"));
        assert!(!slugger.is_valid("ab de"));
        assert!(!slugger.is_valid("abcdé"));
    }

    #[test]
    fn test_zero_length_rejects_everything() {
        let slugger = FixedLenSlugger::new(0);
        assert!(!slugger.is_valid(""));
        assert!(!slugger.is_valid("abcde"));
    }

    #[test]
    fn test_zero_length_generates_empty_slug() {
        let slugger = FixedLenSlugger::new(0);
        let slug = slugger.generate();

        assert!(slug.is_empty());
        // which in turn never validates
        assert!(!slugger.is_valid(&slug));
    }
}
