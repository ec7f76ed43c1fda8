use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]{10,}$").expect("phone pattern is valid"));

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal `local@domain.tld` shape. Checked against the raw value, so
/// surrounding whitespace fails.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digits, spaces, hyphens, plus signs and parentheses, at least 10 of them.
pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}
