//! Field validation for items.
//!
//! The email rule accepts the usual `local@domain.tld` shape, case-insensitive,
//! and rejects any address containing two consecutive dots.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, domain labels, and a TLD of at least two letters.
///
/// The `regex` crate has no look-ahead, so the consecutive-dot rule lives in
/// [`is_valid_email`].
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("Invalid email regex")
});

/// Returns true if `email` satisfies the item email format.
pub fn is_valid_email(email: &str) -> bool {
    !email.contains("..") && EMAIL_PATTERN.is_match(email)
}
