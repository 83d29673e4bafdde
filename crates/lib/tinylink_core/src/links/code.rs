//! Short-code generation.

use rand::distr::Alphanumeric;
use rand::{Rng, rng};

/// Code length in symbols.
pub const CODE_LEN: usize = 6;

/// Generate a random short code: 6 symbols drawn uniformly from the
/// 62-character alphanumeric alphabet (A–Z, a–z, 0–9).
///
/// Uniqueness is the registry's job; this is just the draw.
pub fn generate_code() -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_fixed_length_and_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn codes_vary() {
        let codes: std::collections::HashSet<String> = (0..10).map(|_| generate_code()).collect();
        // 62^6 values; ten draws all colliding would be astonishing.
        assert!(codes.len() > 1);
    }
}
