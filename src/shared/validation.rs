//! Credential Validation
//!
//! Pure shape checks for signup credentials. Neither function performs I/O and
//! both are total: the same input always yields the same result.
//!
//! The email check is deliberately loose. It verifies length bounds and that
//! the last `@` splits the address into a non-empty local part and a domain of
//! at least three characters. It is not an RFC 5322 parser and does no DNS
//! lookups.

use crate::shared::error::SharedError;

/// Shortest accepted email address, in characters
pub const EMAIL_MIN_LEN: usize = 3;
/// Longest accepted email address, in characters
pub const EMAIL_MAX_LEN: usize = 320;
/// Shortest accepted domain part, in characters
pub const EMAIL_MIN_DOMAIN_LEN: usize = 3;
/// Shortest accepted password, in characters
pub const PASSWORD_MIN_LEN: usize = 8;

/// Check that `email` looks like an email address.
///
/// # Errors
///
/// Returns [`SharedError::InvalidFormat`] for the `email` field when the
/// address is too short or too long, has no `@`, has an empty local part, or
/// has a domain shorter than three characters.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let len = email.chars().count();
    if !(EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&len) {
        return Err(SharedError::invalid_format("email"));
    }

    let (local, domain) = email
        .rsplit_once('@')
        .ok_or_else(|| SharedError::invalid_format("email"))?;

    if local.chars().count() < 1 || domain.chars().count() < EMAIL_MIN_DOMAIN_LEN {
        return Err(SharedError::invalid_format("email"));
    }

    Ok(())
}

/// Check that `password` satisfies the strength policy.
///
/// A strong password is at least eight characters long and contains at least
/// one uppercase letter, one lowercase letter, one digit, and one character
/// that is none of those (a symbol). There is no upper bound on length.
///
/// Only `0`-`9` count as digits. Every other character that is neither
/// uppercase nor lowercase is a symbol, including uncased letters such as CJK
/// and numerals such as `½` or `²`.
///
/// # Errors
///
/// Returns [`SharedError::WeakPassword`] if any requirement is not met.
pub fn validate_password_strength(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SharedError::WeakPassword);
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in password.chars() {
        if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            has_symbol = true;
        }
    }

    if has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err(SharedError::WeakPassword)
    }
}
