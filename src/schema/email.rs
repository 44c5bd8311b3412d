//! Email syntax check.
//!
//! Accepts standard addresses, plus addressing and subdomains. The domain
//! must have at least one dot. No surrounding whitespace is tolerated.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("EMAIL_REGEX is a valid regex pattern")
});

/// Shortest plausible address (a@b.c).
const MIN_EMAIL_LENGTH: usize = 5;

/// Longest address allowed by RFC 5321.
const MAX_EMAIL_LENGTH: usize = 254;

/// Whether `email` is a syntactically valid address.
pub fn is_valid_email(email: &str) -> bool {
    (MIN_EMAIL_LENGTH..=MAX_EMAIL_LENGTH).contains(&email.len()) && EMAIL_REGEX.is_match(email)
}
