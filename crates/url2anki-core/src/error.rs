//! Top-level error for a scrape run.
//!
//! Every stage has its own error type; this enum only unifies them so the
//! pipeline can use `?` and the CLI can print one chain.

use crate::export::ExportError;
use crate::extract::ParseError;
use crate::fetch::FetchError;
use crate::pair::CountMismatch;
use crate::preview::PreviewError;

#[derive(Debug, thiserror::Error)]
pub enum Url2AnkiError {
    #[error("failed to fetch the URL")]
    Fetch(#[from] FetchError),
    #[error("failed to parse the page")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    CountMismatch(#[from] CountMismatch),
    #[error("failed to export flashcards")]
    Export(#[from] ExportError),
    #[error("failed to show the preview")]
    Preview(#[from] PreviewError),
}
