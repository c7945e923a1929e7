//! `wxr normalize <value>` – show how a candidate URL is normalized.

use wxr_core::url_model::{is_wxr_candidate, normalize_wxr_str};

pub fn run_normalize(value: &str) {
    match normalize_wxr_str(value) {
        Some(url) if is_wxr_candidate(&url) => println!("{url}"),
        Some(url) => println!("{url}  (not a WXR-looking URL)"),
        None => println!("(rejected)"),
    }
}
