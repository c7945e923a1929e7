//! Blocking catalog client over libcurl.

use std::time::Duration;

use crate::config::CatalogConfig;
use crate::record::DemoRecord;

use super::{parse_demo_body, DemoFetcher, FetchError};

/// Placeholder replaced by the template id in [`CatalogConfig::url_template`].
const ID_PLACEHOLDER: &str = "{id}";

/// Fetches demo records with a single HTTP GET per call.
///
/// Follows redirects and applies connect and total timeouts. There are no
/// transport retries: the resolver's one-refetch bound counts calls, and each
/// call is exactly one request.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    url_template: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CatalogFetcher {
    pub fn new(url_template: impl Into<String>, connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            url_template: url_template.into(),
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &CatalogConfig) -> Self {
        Self::new(
            cfg.url_template.clone(),
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    /// Request URL for a template id.
    pub fn url_for(&self, id: u64) -> String {
        self.url_template.replace(ID_PLACEHOLDER, &id.to_string())
    }
}

impl DemoFetcher for CatalogFetcher {
    fn fetch_by_id(&self, id: u64) -> Result<DemoRecord, FetchError> {
        let url = self.url_for(id);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        tracing::debug!(template_id = id, bytes = body.len(), "fetched demo record from {}", url);
        parse_demo_body(&body)
    }
}
