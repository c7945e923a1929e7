//! Top-level accessor: cached demo record enriched with its WXR URL.

use crate::config::TemplateVariant;
use crate::demo_cache::{self, DemoContentCache};
use crate::record::{DemoRecord, WXR_PATH_KEY};
use crate::remote::DemoFetcher;

use super::resolve::{resolve_wxr_path, Resolution};

/// Reads the cached demo record and makes sure it carries a WXR URL.
///
/// Collaborators are borrowed for the duration of one request; the template
/// variant is read once by the caller and passed in.
pub struct WxrImporter<'a, C: ?Sized, F: ?Sized> {
    cache: &'a C,
    fetcher: &'a F,
    template_type: TemplateVariant,
}

impl<'a, C, F> WxrImporter<'a, C, F>
where
    C: DemoContentCache + ?Sized,
    F: DemoFetcher + ?Sized,
{
    pub fn new(cache: &'a C, fetcher: &'a F, template_type: TemplateVariant) -> Self {
        Self {
            cache,
            fetcher,
            template_type,
        }
    }

    /// Cached import data with the WXR path resolved where possible.
    ///
    /// Returns an empty record when the cache is empty or does not hold an
    /// object. AI-generated templates have no WXR step and are returned as
    /// cached. A newly resolved or re-normalized URL is written back so the
    /// next call finds it directly.
    pub fn import_data_with_wxr(&self) -> DemoRecord {
        self.resolve_cached().record
    }

    /// Like [`import_data_with_wxr`](Self::import_data_with_wxr), keeping the
    /// resolution details.
    pub fn resolve_cached(&self) -> Resolution {
        let Some(record) = demo_cache::cached_record(self.cache) else {
            return Resolution {
                record: DemoRecord::new(),
                found: None,
            };
        };

        if self.template_type == TemplateVariant::Ai {
            tracing::debug!("ai template: WXR resolution not applicable");
            return Resolution {
                record,
                found: None,
            };
        }

        let cached_path = record.get(WXR_PATH_KEY).cloned();
        let resolution = resolve_wxr_path(record, self.fetcher, true);

        if let Some(found) = &resolution.found {
            tracing::debug!(url = %found.url, source = ?found.source, "resolved WXR URL");
            // Already-canonical cached paths need no write.
            if resolution.record.get(WXR_PATH_KEY) != cached_path.as_ref() {
                if let Err(e) = self.cache.update(&resolution.record) {
                    tracing::warn!("failed to persist resolved WXR URL: {:#}", e);
                }
            }
        }

        resolution
    }
}
