//! Form field validation

use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // local@domain.tld, nothing fancier
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Check that `email` looks like `local@domain.tld`
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last@mail.example.org"));
        assert!(validate_email("x+tag@y.co"));

        assert!(!validate_email("a@b"));
        assert!(!validate_email(""));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b@c.com"));
        assert!(!validate_email(" a@b.com"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank(" Sam "));
    }
}
