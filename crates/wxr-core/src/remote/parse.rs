//! Decode a catalog response body into a demo record.

use crate::record::{as_record, DemoRecord};

use super::FetchError;

/// Parses a JSON response body; the top-level value must be an object.
pub fn parse_demo_body(body: &[u8]) -> Result<DemoRecord, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    as_record(value).ok_or(FetchError::NotARecord)
}
