//! Random short-code generation.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet.
//! At the default length of 8 the collision probability is astronomically
//! low; real uniqueness is guaranteed by the unique constraint on
//! `links.code` at commit time.

use rand::Rng;

/// Default short-code length.
pub const CODE_LENGTH: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random alphanumeric code of the given length.
pub fn generate(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_default_length() {
        let code = generate(CODE_LENGTH);
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_generate_custom_length() {
        for length in [1, 4, 16, 32] {
            assert_eq!(generate(length).len(), length);
        }
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate(CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_produces_distinct_codes() {
        let mut codes = HashSet::new();
        for _ in 0..1000 {
            codes.insert(generate(CODE_LENGTH));
        }
        // 62^8 possibilities; 1000 draws colliding would indicate a broken RNG.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_uses_full_alphabet() {
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            for c in generate(CODE_LENGTH).chars() {
                seen.insert(c);
            }
        }
        // 16k uniform draws over 62 symbols should touch every symbol.
        assert_eq!(seen.len(), ALPHABET.len());
    }
}
