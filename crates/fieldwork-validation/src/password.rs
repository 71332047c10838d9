//! Password strength validation

/// Validates password strength: at least 8 characters with at least one
/// lowercase letter, one uppercase letter, and one digit.
///
/// No upper length bound, and no restriction on which characters may appear
/// beyond requiring the three classes present. Length is counted in
/// characters, not bytes.
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }

    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    has_lowercase && has_uppercase && has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Pa55word"));
        assert!(is_strong_password("Password123"));
        assert!(is_strong_password("Pa55wordForAngular"));
    }

    #[test]
    fn test_too_short() {
        assert!(!is_strong_password("aB5"));
        assert!(!is_strong_password("Abc123"));
    }

    #[test]
    fn test_missing_character_class() {
        assert!(!is_strong_password("lowercase1"));
        assert!(!is_strong_password("UPPERCASE1"));
        assert!(!is_strong_password("NoDigitsHere"));
    }

    #[test]
    fn test_symbols_allowed_but_not_required() {
        assert!(is_strong_password("Pa55word!@#"));
        assert!(is_strong_password("Pa55 word"));
    }
}
