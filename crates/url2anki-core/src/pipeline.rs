//! End-to-end scrape: fetch → extract → pair → (preview) → export.

use std::io::Write;
use std::path::PathBuf;

use crate::card::Flashcard;
use crate::error::Url2AnkiError;
use crate::export::{self, ExportFormat};
use crate::extract::{self, HtmlDocument};
use crate::fetch::Fetch;
use crate::pair;
use crate::preview::{self, Confirm, Decision};

/// Everything a run needs, as resolved by the CLI.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// Absolute URL of the page to scrape.
    pub url: String,
    /// CSS selector for question nodes.
    pub question_selector: String,
    /// CSS selector for answer nodes.
    pub answer_selector: String,
    /// Output file; its suffix picks the format.
    pub output_file: PathBuf,
    /// Show the cards and ask before exporting.
    pub preview: bool,
}

/// How a run finished when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Exported {
        cards: usize,
        formats: Vec<ExportFormat>,
    },
    /// The output suffix matched no export format.
    NothingExported { cards: usize },
    /// The operator declined the preview.
    Aborted,
}

/// Fetch the page and pair the selector matches into cards.
pub fn scrape<F: Fetch + ?Sized>(
    fetcher: &F,
    url: &str,
    question_selector: &str,
    answer_selector: &str,
) -> Result<Vec<Flashcard>, Url2AnkiError> {
    tracing::info!("fetching {}", url);
    let body = fetcher.fetch(url)?;
    let doc = HtmlDocument::read(body)?;
    let found = extract::extract(&doc, question_selector, answer_selector)?;
    let cards = pair::pair(&found.questions, &found.answers)?;
    tracing::info!("paired {} flashcard(s)", cards.len());
    Ok(cards)
}

/// Run one scrape described by `request`.
///
/// Progress and the preview go to `out`; `confirm` is only consulted when
/// `request.preview` is set. Stops at the first error.
pub fn run<F, C, W>(
    request: &ScrapeRequest,
    fetcher: &F,
    confirm: &mut C,
    out: &mut W,
) -> Result<RunOutcome, Url2AnkiError>
where
    F: Fetch + ?Sized,
    C: Confirm + ?Sized,
    W: Write,
{
    let cards = scrape(
        fetcher,
        &request.url,
        &request.question_selector,
        &request.answer_selector,
    )?;

    if request.preview && preview::preview(&cards, out, confirm)? == Decision::Aborted {
        writeln!(out, "Aborting.").map_err(preview::PreviewError::from)?;
        tracing::info!("preview declined, nothing exported");
        return Ok(RunOutcome::Aborted);
    }

    let path = &request.output_file;
    let formats = export::export(&cards, path)?;
    if formats.is_empty() {
        return Ok(RunOutcome::NothingExported { cards: cards.len() });
    }
    for _ in &formats {
        if let Err(e) = writeln!(out, "Flashcards exported to {}", path.display()) {
            tracing::warn!("could not report export: {}", e);
        }
    }
    Ok(RunOutcome::Exported {
        cards: cards.len(),
        formats,
    })
}
