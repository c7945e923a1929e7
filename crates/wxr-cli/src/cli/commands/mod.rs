//! CLI command handlers, one per file.

mod fetch;
pub(crate) mod load;
mod normalize;
mod resolve;
mod show;
mod variant;

pub use fetch::run_fetch;
pub use load::run_load;
pub use normalize::run_normalize;
pub use resolve::run_resolve;
pub use show::{render_show, run_show};
pub use variant::run_variant;
