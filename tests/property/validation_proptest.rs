//! Property-based tests for credential validation
//!
//! Inputs are printable ASCII so character classes are unambiguous.

use proptest::prelude::*;
use authgate::shared::{validate_email, validate_password_strength};

fn strong_by_rule(p: &str) -> bool {
    p.chars().count() >= 8
        && p.chars().any(|c| c.is_ascii_uppercase())
        && p.chars().any(|c| c.is_ascii_lowercase())
        && p.chars().any(|c| c.is_ascii_digit())
        && p.chars().any(|c| !c.is_ascii_alphanumeric())
}

fn email_by_rule(e: &str) -> bool {
    let len = e.chars().count();
    if !(3..=320).contains(&len) {
        return false;
    }
    match e.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.chars().count() >= 3,
        None => false,
    }
}

proptest! {
    #[test]
    fn test_password_strength_matches_rule(password in "[ -~]{0,24}") {
        prop_assert_eq!(
            validate_password_strength(&password).is_ok(),
            strong_by_rule(&password)
        );
    }

    #[test]
    fn test_composed_strong_passwords_pass(
        upper in "[A-Z]{1,4}",
        lower in "[a-z]{1,4}",
        digit in "[0-9]{1,4}",
        symbol in "[!-/:-@]{1,4}",
        filler in "[a-zA-Z0-9]{0,8}",
    ) {
        let password = format!("{upper}{lower}{digit}{symbol}{filler}");
        prop_assume!(password.len() >= 8);
        prop_assert!(validate_password_strength(&password).is_ok());
    }

    #[test]
    fn test_short_passwords_fail(password in "[ -~]{0,7}") {
        prop_assert!(validate_password_strength(&password).is_err());
    }

    #[test]
    fn test_email_matches_rule(email in "[a-c@.]{0,10}") {
        prop_assert_eq!(validate_email(&email).is_ok(), email_by_rule(&email));
    }

    #[test]
    fn test_well_formed_emails_pass(
        local in "[a-z0-9._]{1,20}",
        domain in "[a-z]{1,10}\\.[a-z]{2,4}",
    ) {
        let email = format!("{local}@{domain}");
        prop_assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn test_emails_without_at_fail(email in "[a-z.]{0,30}") {
        prop_assert!(validate_email(&email).is_err());
    }

    #[test]
    fn test_validation_is_deterministic(input in "[ -~]{0,24}") {
        prop_assert_eq!(validate_email(&input), validate_email(&input));
        prop_assert_eq!(
            validate_password_strength(&input),
            validate_password_strength(&input)
        );
    }
}
