//! Custom field validators used by the request types
//!
//! Built-in `validator` rules (email, url, length, range) cover most
//! fields; the functions here fill the remaining gaps.

use std::borrow::Cow;
use validator::ValidationError;

/// Maximum username length
pub const USERNAME_MAX_LEN: u64 = 30;

/// Minimum username length
pub const USERNAME_MIN_LEN: u64 = 3;

/// Minimum password length
pub const PASSWORD_MIN_LEN: u64 = 6;

/// bcrypt ignores every byte past this point
pub const PASSWORD_MAX_BYTES: usize = 72;

/// Returns true when the value consists only of ASCII letters and digits
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validator hook: username must be alphanumeric
pub fn validate_alphanumeric(value: &str) -> Result<(), ValidationError> {
    if is_alphanumeric(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("alphanum");
        error.message = Some(Cow::Borrowed("must only contain alpha-numeric characters"));
        Err(error)
    }
}

/// Validator hook: free-text fields must not be blank
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        Err(error)
    } else {
        Ok(())
    }
}

/// Validator hook: password must fit in bcrypt's input
///
/// Measured in UTF-8 bytes, not characters.
pub fn validate_password_bytes(value: &str) -> Result<(), ValidationError> {
    if value.len() > PASSWORD_MAX_BYTES {
        let mut error = ValidationError::new("password_bytes");
        error.message = Some(Cow::Borrowed("must be at most 72 bytes"));
        Err(error)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bret", true)]
    #[case("Antonette99", true)]
    #[case("with space", false)]
    #[case("under_score", false)]
    #[case("", false)]
    #[case("ümlaut", false)]
    fn test_is_alphanumeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_alphanumeric(input), expected);
    }

    #[test]
    fn test_validate_alphanumeric_sets_code() {
        let err = validate_alphanumeric("a-b").unwrap_err();
        assert_eq!(err.code, "alphanum");
        assert!(err.message.is_some());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn test_validate_not_blank_rejects(#[case] input: &str) {
        assert!(validate_not_blank(input).is_err());
    }

    #[rstest]
    #[case("a".repeat(72), true)]
    #[case("a".repeat(73), false)]
    // 36 two-byte characters fill the limit exactly
    #[case("é".repeat(36), true)]
    #[case("é".repeat(37), false)]
    fn test_validate_password_bytes(#[case] input: String, #[case] accepted: bool) {
        assert_eq!(validate_password_bytes(&input).is_ok(), accepted);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_ascii_alphanumeric_strings_accepted(value in "[a-zA-Z0-9]{1,30}") {
            prop_assert!(validate_alphanumeric(&value).is_ok());
        }

        #[test]
        fn prop_strings_with_symbols_rejected(
            prefix in "[a-zA-Z0-9]{0,10}",
            symbol in "[-_ .@!#]",
            suffix in "[a-zA-Z0-9]{0,10}"
        ) {
            let value = format!("{}{}{}", prefix, symbol, suffix);
            prop_assert!(validate_alphanumeric(&value).is_err());
        }
    }
}
