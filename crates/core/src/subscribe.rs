//! Newsletter signup — address validation and canned responses.
//!
//! There is no mail backend; a well-formed address is simply acknowledged.
//! Validation mirrors the form rule the site has always used: something
//! before the `@`, something after it, and a dot in the domain part, with no
//! whitespace anywhere.

use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

/// Response for a well-formed address.
pub const SUBSCRIBE_SUCCESS: &str =
    "Thank you for subscribing! You'll receive our latest updates.";

/// Response for a malformed address.
pub const SUBSCRIBE_INVALID: &str = "Please enter a valid email address.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Whether `address` passes the signup form's shape check. This is not RFC
/// 5322; it rejects the obvious typos and nothing more.
pub fn is_valid_email(address: &str) -> bool {
    email_re().is_match(address)
}

/// Validate an address and produce the message to show the reader.
pub fn subscribe(address: &str) -> Result<&'static str, &'static str> {
    if is_valid_email(address) {
        info!(address, "Newsletter signup");
        Ok(SUBSCRIBE_SUCCESS)
    } else {
        Err(SUBSCRIBE_INVALID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
        assert!(is_valid_email("x@y.zz"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("reader"));
        assert!(!is_valid_email("reader@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("reader@example"), "domain needs a dot");
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("rea der@example.com"));
        assert!(!is_valid_email("reader@exa mple.com"));
        assert!(!is_valid_email("reader@@example.com"));
        assert!(!is_valid_email(" reader@example.com"));
    }

    #[test]
    fn subscribe_returns_the_canned_messages() {
        assert_eq!(subscribe("reader@example.com"), Ok(SUBSCRIBE_SUCCESS));
        assert_eq!(subscribe("not-an-email"), Err(SUBSCRIBE_INVALID));
    }
}
