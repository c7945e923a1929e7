//! Strict URL sanitization for storage.

use url::Url;

/// Schemes accepted for a stored WXR location.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Sanitizes an absolute URL for storage, or returns `None` when it is unusable.
///
/// Scheme-less input is not repaired here; see `normalize_wxr_str`.
///
/// - Rejects any control character
/// - Encodes literal spaces as `%20`
/// - Requires an allowed scheme and a non-empty host
/// - Returns the canonical serialization (normalized percent-encoding,
///   lowercase scheme and host), so sanitizing twice is a no-op
pub fn sanitize_url_for_storage(raw: &str) -> Option<String> {
    if raw.chars().any(char::is_control) {
        return None;
    }

    let spaced = raw.replace(' ', "%20");
    let parsed = Url::parse(&spaced).ok()?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return None;
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return None;
    }

    Some(parsed.to_string())
}
