//! `url2anki -u <url> -q <sel> -a <sel>` – scrape, optionally preview, export.

use anyhow::{anyhow, Result};
use std::io;
use url2anki_core::config::Url2AnkiConfig;
use url2anki_core::fetch::CurlFetcher;
use url2anki_core::preview::PromptConfirm;
use url2anki_core::{RunOutcome, ScrapeRequest};

use crate::cli::ScrapeArgs;

/// Merge flags over config-file defaults into a request.
pub(crate) fn build_request(args: ScrapeArgs, cfg: &Url2AnkiConfig) -> Result<ScrapeRequest> {
    Ok(ScrapeRequest {
        url: args.url.ok_or_else(|| anyhow!("--url is required"))?,
        question_selector: args
            .question_selector
            .ok_or_else(|| anyhow!("--question-selector is required"))?,
        answer_selector: args
            .answer_selector
            .ok_or_else(|| anyhow!("--answer-selector is required"))?,
        output_file: args
            .output_file
            .unwrap_or_else(|| cfg.output_file.clone()),
        preview: args.preview.unwrap_or(cfg.preview),
    })
}

pub fn run_scrape(args: ScrapeArgs, cfg: &Url2AnkiConfig) -> Result<()> {
    let request = build_request(args, cfg)?;
    tracing::debug!("scrape request: {:?}", request);

    let outcome = url2anki_core::run(
        &request,
        &CurlFetcher,
        &mut PromptConfirm::stdio(),
        &mut io::stdout(),
    )?;

    match outcome {
        RunOutcome::Exported { cards, formats } => {
            tracing::info!("run finished: {} card(s), formats {:?}", cards, formats);
        }
        RunOutcome::NothingExported { cards } => {
            eprintln!(
                "url2anki: {} has no .json or .csv suffix; {} flashcard(s) not exported",
                request.output_file.display(),
                cards
            );
        }
        RunOutcome::Aborted => {}
    }
    Ok(())
}
