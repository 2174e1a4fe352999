pub mod config;
pub mod logging;

pub mod card;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod pair;
pub mod pipeline;
pub mod preview;

pub use card::Flashcard;
pub use error::Url2AnkiError;
pub use pipeline::{run, scrape, RunOutcome, ScrapeRequest};
