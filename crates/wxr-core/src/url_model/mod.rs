//! URL normalization for WXR candidates.
//!
//! Turns an arbitrary record value into a canonical absolute URL or nothing.
//! Normalization is all-or-nothing: a value either comes out fully sanitized
//! or is rejected.

mod entities;
mod sanitize;

pub use entities::decode_html_entities;
pub use sanitize::sanitize_url_for_storage;

use serde_json::Value;

use crate::wxr::extract_wxr_url;

/// Normalizes a candidate WXR value.
///
/// Arrays and objects are searched with [`extract_wxr_url`], so a slot may
/// itself hold a bag of alternatives. Strings go through
/// [`normalize_wxr_str`]. Any other value yields `None`.
pub fn normalize_wxr_url(value: &Value) -> Option<String> {
    match value {
        Value::Array(_) | Value::Object(_) => extract_wxr_url(value),
        Value::String(s) => normalize_wxr_str(s),
        _ => None,
    }
}

/// Normalizes a textual candidate.
///
/// Decodes HTML entities and trims; rejects empty and `"null"` (any case);
/// repairs protocol-relative `//host/...` to `https://host/...` and bare
/// `host/...` to `http://host/...`; then applies [`sanitize_url_for_storage`].
///
/// # Examples
///
/// - `normalize_wxr_str("//cdn.example.com/e.xml")` → `Some("https://cdn.example.com/e.xml")`
/// - `normalize_wxr_str("cdn.example.com/e.xml")` → `Some("http://cdn.example.com/e.xml")`
/// - `normalize_wxr_str("NULL")` → `None`
pub fn normalize_wxr_str(raw: &str) -> Option<String> {
    let decoded = decode_html_entities(raw);
    let value = decoded.trim();

    if value.is_empty() || value.eq_ignore_ascii_case("null") {
        return None;
    }

    if value.starts_with("//") {
        return sanitize_url_for_storage(&format!("https:{value}"));
    }
    if starts_with_bare_host(value) {
        return sanitize_url_for_storage(&format!("http://{value}"));
    }
    sanitize_url_for_storage(value)
}

/// True for scheme-less values whose first segment looks like `host[:port]`:
/// a dotted name with at least one letter, and only host characters (no
/// spaces, no `@`, no leading `/`). Bare numbers such as `4.5` do not qualify.
fn starts_with_bare_host(value: &str) -> bool {
    if value.contains("://") {
        return false;
    }
    let host = value.split(['/', '?', '#']).next().unwrap_or_default();
    host.contains('.')
        && !host.starts_with('.')
        && host.chars().any(char::is_alphabetic)
        && host
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | ':'))
}

/// True if a normalized URL plausibly points at a WXR export file.
pub fn is_wxr_candidate(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.contains(".xml") || lower.contains("wxr")
}
