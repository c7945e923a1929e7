//! Remote catalog access: refetch a demo record by its template id.
//!
//! The resolver only depends on the [`DemoFetcher`] trait; [`CatalogFetcher`]
//! is the libcurl-backed implementation used by the CLI.

mod catalog;
mod parse;

pub use catalog::CatalogFetcher;
pub use parse::parse_demo_body;

use crate::record::DemoRecord;

/// Failure to obtain a fresh demo record. Timeouts surface as `Transport`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("catalog returned HTTP {0}")]
    Http(u32),
    #[error("catalog response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog response is not a demo record")]
    NotARecord,
}

/// Source of authoritative demo records, keyed by template id.
pub trait DemoFetcher {
    /// Fetches the current record for `id`. One call is one round-trip.
    fn fetch_by_id(&self, id: u64) -> Result<DemoRecord, FetchError>;
}
