// 🔎 Checks - small stateless predicates
// Independent of the account model.

use thiserror::Error;

/// Shortest string that can pass the IBAN shape check
pub const IBAN_MIN_LENGTH: usize = 6;

// ============================================================================
// IBAN SHAPE
// ============================================================================

/// Why a string does not look like an IBAN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanShapeError {
    #[error("IBAN too short: len={len} (need >= {})", IBAN_MIN_LENGTH)]
    TooShort { len: usize },

    #[error("first two characters must be letters, got '{prefix}'")]
    CountryCodeNotAlphabetic { prefix: String },
}

/// Check the minimal IBAN shape: at least 6 bytes, first two ASCII letters.
///
/// This is a shape check only; no checksum or country validation happens.
pub fn check_iban_shape(s: &str) -> Result<(), IbanShapeError> {
    let bytes = s.as_bytes();
    if bytes.len() < IBAN_MIN_LENGTH {
        return Err(IbanShapeError::TooShort { len: bytes.len() });
    }

    if !(bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_alphabetic()) {
        return Err(IbanShapeError::CountryCodeNotAlphabetic {
            prefix: s.chars().take(2).collect(),
        });
    }

    Ok(())
}

pub fn looks_like_iban(s: &str) -> bool {
    check_iban_shape(s).is_ok()
}

// ============================================================================
// RANGES
// ============================================================================

/// `lo <= v <= hi`. An inverted range (`lo > hi`) contains nothing.
pub fn in_closed_range(v: i32, lo: i32, hi: i32) -> bool {
    lo <= v && v <= hi
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_iban() {
        assert!(looks_like_iban("PT1234"));
        assert!(looks_like_iban("DE0099"));
        assert!(looks_like_iban("pt50000201231234567890154"));
        assert!(!looks_like_iban("P1"));
        assert!(!looks_like_iban("1T9999"));
        assert!(!looks_like_iban("P19999"));
        assert!(!looks_like_iban(""));
    }

    #[test]
    fn test_iban_shape_explains_short_input() {
        assert_eq!(check_iban_shape("PT12"), Err(IbanShapeError::TooShort { len: 4 }));
        assert_eq!(
            check_iban_shape("P1").unwrap_err().to_string(),
            "IBAN too short: len=2 (need >= 6)"
        );
    }

    #[test]
    fn test_iban_shape_explains_bad_prefix() {
        let err = check_iban_shape("1T9999").unwrap_err();
        assert_eq!(
            err,
            IbanShapeError::CountryCodeNotAlphabetic {
                prefix: "1T".to_string()
            }
        );
        assert!(err.to_string().contains("'1T'"));
    }

    #[test]
    fn test_iban_shape_non_ascii_letters_rejected() {
        // "ÉT" is two chars but the first byte is not an ASCII letter
        assert!(!looks_like_iban("ÉT12345"));
    }

    #[test]
    fn test_iban_shape_prefix_keeps_whole_characters() {
        assert_eq!(
            check_iban_shape("€T1234"),
            Err(IbanShapeError::CountryCodeNotAlphabetic {
                prefix: "€T".to_string()
            })
        );
        assert_eq!(
            check_iban_shape("ÉT12345"),
            Err(IbanShapeError::CountryCodeNotAlphabetic {
                prefix: "ÉT".to_string()
            })
        );
    }

    #[test]
    fn test_in_closed_range() {
        assert!(in_closed_range(5, 0, 10));
        assert!(in_closed_range(0, 0, 10));
        assert!(in_closed_range(10, 0, 10));
        assert!(!in_closed_range(11, 0, 10));
        assert!(!in_closed_range(-1, 0, 10));
        assert!(!in_closed_range(5, 10, 0));
    }
}
