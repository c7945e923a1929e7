//! Depth-first search for a plausible WXR URL inside an untyped structure.

use serde_json::Value;

use crate::record::DemoRecord;
use crate::url_model::{is_wxr_candidate, normalize_wxr_str};

/// Finds the first plausible WXR URL inside an array or object.
///
/// Children are visited in their natural order (insertion order for objects).
/// Strings are normalized, nested containers are searched recursively, and
/// the first normalized value passing [`is_wxr_candidate`] wins. Scalars at
/// the top level yield `None`.
pub fn extract_wxr_url(node: &Value) -> Option<String> {
    match node {
        Value::Array(items) => first_candidate(items.iter()),
        Value::Object(map) => first_candidate(map.values()),
        _ => None,
    }
}

/// Same search as [`extract_wxr_url`], over the values of a whole record.
pub fn extract_wxr_url_from_record(record: &DemoRecord) -> Option<String> {
    first_candidate(record.values())
}

fn first_candidate<'a>(children: impl Iterator<Item = &'a Value>) -> Option<String> {
    children
        .filter_map(|child| match child {
            Value::String(s) => normalize_wxr_str(s),
            Value::Array(_) | Value::Object(_) => extract_wxr_url(child),
            _ => None,
        })
        .find(|candidate| is_wxr_candidate(candidate))
}
