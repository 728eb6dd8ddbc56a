//! Short code generation and validation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric
//! alphabet. Randomness is not cryptographic; uniqueness is handled by
//! the registrar's collision retry, not by entropy guarantees.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Codes that cannot be used as short links.
///
/// These collide with the service's own routes: a link holding one of
/// them would be shadowed by the static route and never resolve.
const RESERVED_CODES: &[&str] = &["health", "links"];

/// Compiled regex for code validation: 6 to 8 alphanumeric characters.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random code of `length` alphanumeric characters.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true iff `code` is 6-8 characters from `[A-Za-z0-9]`.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Returns true iff `code` collides with a service route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-provided custom short code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code is not 6-8 alphanumeric
/// characters or is reserved for a service route.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Custom code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    if is_reserved_code(code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(6).len(), 6);
        assert_eq!(generate_code(8).len(), 8);
    }

    #[test]
    fn test_generate_code_uses_alphanumeric_alphabet() {
        for _ in 0..100 {
            let code = generate_code(6);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        for _ in 0..100 {
            assert!(is_valid_code(&generate_code(6)));
        }
    }

    #[test]
    fn test_generate_code_rarely_collides() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(6));
        }

        // 62^6 keyspace; 1000 draws colliding would indicate a broken generator.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_valid_code_boundaries() {
        assert!(is_valid_code("abc123"));
        assert!(is_valid_code("ABCdef12"));
        assert!(is_valid_code("1234567"));
    }

    #[test]
    fn test_invalid_code_length() {
        assert!(!is_valid_code("abc12"));
        assert!(!is_valid_code("abcdef123"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn test_invalid_code_characters() {
        assert!(!is_valid_code("abc-12"));
        assert!(!is_valid_code("abc_123"));
        assert!(!is_valid_code("abc 12"));
        assert!(!is_valid_code("abcé12"));
    }

    #[test]
    fn test_reserved_codes_rejected() {
        for &reserved in RESERVED_CODES {
            assert!(is_reserved_code(reserved));
        }

        let err = validate_custom_code("health").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_non_reserved_code_passes() {
        assert!(!is_reserved_code("healthy1"));
        assert!(validate_custom_code("healthy1").is_ok());
    }

    #[test]
    fn test_validate_custom_code_error() {
        let err = validate_custom_code("bad!").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("6-8 alphanumeric"));
    }

    #[test]
    fn test_validate_custom_code_ok() {
        assert!(validate_custom_code("promo24").is_ok());
    }
}
