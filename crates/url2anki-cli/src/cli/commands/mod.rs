//! CLI command handlers, one per file.

mod completions;
mod man;
mod scrape;
mod version;

pub use completions::run_completions;
pub use man::run_man;
pub use scrape::run_scrape;
pub use version::run_version;

#[cfg(test)]
pub(crate) use scrape::build_request;
