use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Local part of letters/digits/._%+-, a domain of letters/digits/.-, then a
// dot and a top-level segment of at least two letters. `user@domain.c` is
// rejected, `user@domain.co` is accepted.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// The two user-visible validation failures. The `Display` text is exactly
/// what the form renders under the email field.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Invalid email address")]
    Invalid,
}

/// On-submit email check. Deliberately not trimmed first: a whitespace-only
/// entry fails the pattern check, not the required check.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Missing);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}
