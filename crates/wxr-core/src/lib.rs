pub mod config;
pub mod logging;

pub mod demo_cache;
pub mod record;
pub mod remote;
pub mod url_model;
pub mod wxr;
