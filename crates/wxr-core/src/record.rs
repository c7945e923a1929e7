//! Demo record shape: an untyped, insertion-ordered JSON object describing one
//! catalogued starter template.
//!
//! Only two keys are conventional: [`WXR_PATH_KEY`] and [`ID_KEY`]. Everything
//! else is opaque and passed through untouched.

use serde_json::{Map, Value};

/// Metadata for one starter template as returned by the catalog.
pub type DemoRecord = Map<String, Value>;

/// Key holding the WXR export URL.
pub const WXR_PATH_KEY: &str = "astra-site-wxr-path";

/// Key holding the catalog identifier of the template.
pub const ID_KEY: &str = "id";

/// Returns the record if `value` is a JSON object, otherwise `None`.
pub fn as_record(value: Value) -> Option<DemoRecord> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Positive catalog identifier of the template, if the record carries one.
///
/// Accepts a JSON integer or a decimal string; zero, negatives, floats and
/// anything else yield `None`.
pub fn template_id(record: &DemoRecord) -> Option<u64> {
    let id = match record.get(ID_KEY)? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    (id > 0).then_some(id)
}
