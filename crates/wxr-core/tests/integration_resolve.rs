//! Integration test: file-backed demo cache plus a local catalog server.
//!
//! Runs the full import-data path (cache read, resolution, single refetch,
//! cache write-back) against real HTTP and a real cache file.

mod common;

use std::collections::HashMap;
use std::time::Duration;

use serde_json::{json, Value};
use tempfile::tempdir;
use wxr_core::config::TemplateVariant;
use wxr_core::demo_cache::{DemoContentCache, FileDemoCache};
use wxr_core::record::{as_record, WXR_PATH_KEY};
use wxr_core::remote::{CatalogFetcher, DemoFetcher, FetchError};
use wxr_core::wxr::{resolve_wxr_path, WxrImporter, WxrSource};

fn fetcher_for(server: &common::catalog_server::CatalogServer) -> CatalogFetcher {
    CatalogFetcher::new(
        server.url_template.clone(),
        Duration::from_secs(2),
        Duration::from_secs(5),
    )
}

fn seed(cache: &FileDemoCache, value: Value) {
    cache.update(&as_record(value).unwrap()).unwrap();
}

#[test]
fn refetched_url_is_persisted_and_reused() {
    let server = common::catalog_server::start(HashMap::from([(
        42,
        r#"{"id": 42, "astra-site-wxr-path": "//cdn.example.com/e.xml"}"#.to_string(),
    )]));
    let fetcher = fetcher_for(&server);
    let dir = tempdir().unwrap();
    let cache = FileDemoCache::at(dir.path().join("demo_content.json"));
    seed(&cache, json!({"id": 42, "title": "Agency"}));

    let importer = WxrImporter::new(&cache, &fetcher, TemplateVariant::Classic);
    let resolution = importer.resolve_cached();
    assert_eq!(resolution.wxr_url(), Some("https://cdn.example.com/e.xml"));
    assert_eq!(resolution.found.as_ref().unwrap().source, WxrSource::Refetched);
    assert_eq!(server.hits(), 1);

    let on_disk = cache.get().unwrap();
    assert_eq!(on_disk[WXR_PATH_KEY], json!("https://cdn.example.com/e.xml"));
    assert_eq!(on_disk["title"], json!("Agency"));

    let again = importer.import_data_with_wxr();
    assert_eq!(again[WXR_PATH_KEY], json!("https://cdn.example.com/e.xml"));
    assert_eq!(server.hits(), 1);
}

#[test]
fn refetched_record_without_url_hits_catalog_once() {
    let server = common::catalog_server::start(HashMap::from([(
        7,
        r#"{"id": 7, "title": "No export"}"#.to_string(),
    )]));
    let fetcher = fetcher_for(&server);
    let input = as_record(json!({"id": 7})).unwrap();

    let resolution = resolve_wxr_path(input.clone(), &fetcher, true);
    assert_eq!(resolution.wxr_url(), None);
    assert_eq!(resolution.record, input);
    assert_eq!(server.hits(), 1);
}

#[test]
fn catalog_404_degrades_to_no_url() {
    let server = common::catalog_server::start(HashMap::new());
    let fetcher = fetcher_for(&server);
    let dir = tempdir().unwrap();
    let cache = FileDemoCache::at(dir.path().join("demo_content.json"));
    seed(&cache, json!({"id": 5}));

    let importer = WxrImporter::new(&cache, &fetcher, TemplateVariant::Classic);
    let record = importer.import_data_with_wxr();
    assert_eq!(Value::Object(record), json!({"id": 5}));
    assert_eq!(server.hits(), 1);
    assert_eq!(cache.get(), Some(json!({"id": 5})));
}

#[test]
fn catalog_fetcher_reports_http_and_body_errors() {
    let server = common::catalog_server::start(HashMap::from([
        (1, "not json".to_string()),
        (2, "[]".to_string()),
    ]));
    let fetcher = fetcher_for(&server);
    assert!(matches!(fetcher.fetch_by_id(1), Err(FetchError::Json(_))));
    assert!(matches!(fetcher.fetch_by_id(2), Err(FetchError::NotARecord)));
    assert!(matches!(fetcher.fetch_by_id(3), Err(FetchError::Http(404))));
}

#[test]
fn ai_variant_never_touches_catalog() {
    let server = common::catalog_server::start(HashMap::from([(
        42,
        r#"{"astra-site-wxr-path": "https://h/e.xml"}"#.to_string(),
    )]));
    let fetcher = fetcher_for(&server);
    let dir = tempdir().unwrap();
    let cache = FileDemoCache::at(dir.path().join("demo_content.json"));
    seed(&cache, json!({"id": 42}));

    let importer = WxrImporter::new(&cache, &fetcher, TemplateVariant::Ai);
    let record = importer.import_data_with_wxr();
    assert_eq!(Value::Object(record), json!({"id": 42}));
    assert_eq!(server.hits(), 0);
}
