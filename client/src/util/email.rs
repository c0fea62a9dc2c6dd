//! Heuristic email shape check.
//!
//! Accepts `<non-space>@<non-space>.<non-space>` over the whole input. This is
//! a typo catcher, not an RFC 5322 validator; the server has the final word.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Whether `input` looks like an email address.
pub fn looks_like_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}
