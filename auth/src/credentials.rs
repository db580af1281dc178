use std::str::FromStr;

use unicode_general_category::get_general_category;
use unicode_general_category::GeneralCategory;

/// Name length bounds, in bytes.
pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 32;

/// Password length bounds, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 32;

/// Check that `email` is a single bare mailbox address.
///
/// The address must parse under RFC 5322 and the parsed address must be
/// exactly the input: display names (`Alice <alice@example.com>`) and
/// anything the parser would silently rewrite are rejected.
pub fn validate_email(email: &str) -> bool {
    email_address::EmailAddress::from_str(email)
        .map(|parsed| parsed.email() == email)
        .unwrap_or(false)
}

/// Check that `name` is between 3 and 32 bytes long.
pub fn validate_name(name: &str) -> bool {
    (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&name.len())
}

/// Check password complexity.
///
/// A valid password has 8 to 32 characters, at least one numeric character
/// and at least one punctuation or symbol character. Both classes are
/// resolved against the Unicode general category, so `٣` counts as a digit
/// and `€` as a symbol.
pub fn validate_password(password: &str) -> bool {
    let mut length = 0;
    let mut has_number = false;
    let mut has_special = false;

    for c in password.chars() {
        length += 1;

        if c.is_numeric() {
            has_number = true;
        } else if is_punctuation_or_symbol(c) {
            has_special = true;
        }
    }

    (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) && has_number && has_special
}

fn is_punctuation_or_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_bare_address() {
        assert!(validate_email("alice@example.com"));
        assert!(validate_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(!validate_email(""));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("alice@"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_validate_email_rejects_display_name_form() {
        assert!(!validate_email("Alice <alice@example.com>"));
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(!validate_name(""));
        assert!(!validate_name("ab"));
        assert!(validate_name("abc"));
        assert!(validate_name(&"a".repeat(32)));
        assert!(!validate_name(&"a".repeat(33)));
    }

    #[test]
    fn test_validate_name_counts_bytes() {
        // two characters, four bytes
        assert!(validate_name("ñö"));
        // eleven characters, thirty-three bytes
        assert!(!validate_name(&"€".repeat(11)));
    }

    #[test]
    fn test_validate_password_accepts_complex() {
        assert!(validate_password("pass_word1"));
        assert!(validate_password("Sup3r$ecret"));
        assert!(validate_password("12345678!"));
    }

    #[test]
    fn test_validate_password_length_bounds() {
        assert!(!validate_password("p4ss_wd"));
        assert!(validate_password("p4ss_wrd"));

        let longest = format!("{}1!", "a".repeat(30));
        assert_eq!(longest.chars().count(), 32);
        assert!(validate_password(&longest));

        let too_long = format!("{}1!", "a".repeat(31));
        assert!(!validate_password(&too_long));
    }

    #[test]
    fn test_validate_password_requires_number() {
        assert!(!validate_password("pass_word!"));
    }

    #[test]
    fn test_validate_password_requires_special() {
        assert!(!validate_password("password123"));
        assert!(!validate_password("pass word 1"));
    }

    #[test]
    fn test_validate_password_is_unicode_aware() {
        // Arabic-Indic digit three
        assert!(validate_password("contraseña_٣x"));
        // currency symbol
        assert!(validate_password("password€1"));
        // length is counted in characters, not bytes
        assert!(validate_password("ññññññ1!"));
    }
}
