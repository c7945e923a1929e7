//! WXR path resolution.
//!
//! Locates the WXR export URL for a cached demo record: explicit field first,
//! then a recursive search of the record, then a single refetch of the record
//! from the catalog. Absence of a URL is a normal outcome, never an error.

mod extract;
mod import;
mod resolve;

pub use extract::{extract_wxr_url, extract_wxr_url_from_record};
pub use import::WxrImporter;
pub use resolve::{resolve_wxr_path, Resolution, ResolvedWxr, WxrSource};
