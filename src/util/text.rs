use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9_\-\.\+]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,5})").expect("email pattern compiles")
});

static URL_UNSAFE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\.~]+").expect("url pattern compiles"));

/// Absent, empty or whitespace-only text becomes `""`; anything else is kept as-is.
pub fn to_empty_when_null(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => "",
    }
}

/// True when the text contains exactly one address-shaped match
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.find_iter(email).count() == 1
}

/// Lowercase slug with every run of unsafe characters collapsed to `-`
pub fn friendly_url(value: &str) -> String {
    URL_UNSAFE_RUN.replace_all(value, "-").to_lowercase()
}
