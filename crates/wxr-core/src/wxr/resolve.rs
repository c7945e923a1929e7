//! Resolve a demo record to its WXR URL with at most one catalog refetch.

use serde_json::Value;

use crate::record::{template_id, DemoRecord, WXR_PATH_KEY};
use crate::remote::DemoFetcher;
use crate::url_model::normalize_wxr_url;

use super::extract::extract_wxr_url_from_record;

/// Where a resolved WXR URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WxrSource {
    /// The record's own `astra-site-wxr-path` field.
    Explicit,
    /// Found by searching the rest of the record.
    Nested,
    /// Found in a freshly fetched copy of the record.
    Refetched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWxr {
    pub url: String,
    pub source: WxrSource,
}

/// Outcome of [`resolve_wxr_path`].
///
/// When `found` is `Some`, `record[WXR_PATH_KEY]` holds the same URL. When it
/// is `None`, `record` is exactly the input record.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: DemoRecord,
    pub found: Option<ResolvedWxr>,
}

impl Resolution {
    fn found(mut record: DemoRecord, url: String, source: WxrSource) -> Self {
        record.insert(WXR_PATH_KEY.to_string(), Value::String(url.clone()));
        Self {
            record,
            found: Some(ResolvedWxr { url, source }),
        }
    }

    fn empty(record: DemoRecord) -> Self {
        Self {
            record,
            found: None,
        }
    }

    /// The resolved URL, if any.
    pub fn wxr_url(&self) -> Option<&str> {
        self.found.as_ref().map(|f| f.url.as_str())
    }
}

/// Ensures `record` carries a usable WXR URL.
///
/// Order of attempts:
/// 1. the explicit `astra-site-wxr-path` field, normalized;
/// 2. a depth-first search of the whole record;
/// 3. if `allow_remote`, one refetch of the record by its `id`, resolved
///    again with `allow_remote = false` and merged into the original record.
///
/// The inner call never allows a remote fetch, so `fetcher` is called at most
/// once per outer call. Every failure degrades to an empty resolution; fetch
/// failures are logged.
pub fn resolve_wxr_path<F>(record: DemoRecord, fetcher: &F, allow_remote: bool) -> Resolution
where
    F: DemoFetcher + ?Sized,
{
    if let Some(url) = record.get(WXR_PATH_KEY).and_then(normalize_wxr_url) {
        return Resolution::found(record, url, WxrSource::Explicit);
    }

    if let Some(url) = extract_wxr_url_from_record(&record) {
        return Resolution::found(record, url, WxrSource::Nested);
    }

    if !allow_remote {
        return Resolution::empty(record);
    }

    let Some(id) = template_id(&record) else {
        tracing::debug!("no WXR URL and no usable template id; skipping refetch");
        return Resolution::empty(record);
    };

    tracing::debug!(template_id = id, "refetching demo data to locate WXR URL");
    let refetched = match fetcher.fetch_by_id(id) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(template_id = id, "unable to refetch demo data for WXR: {}", e);
            return Resolution::empty(record);
        }
    };

    match resolve_wxr_path(refetched, fetcher, false).found {
        Some(inner) => Resolution::found(record, inner.url, WxrSource::Refetched),
        None => {
            tracing::debug!(template_id = id, "refetched demo data has no WXR URL");
            Resolution::empty(record)
        }
    }
}
