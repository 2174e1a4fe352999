//! Operator preview: print the cards as a table and ask for confirmation.

mod table;

pub use table::render_table;

use std::io::{self, BufRead, Write};

use crate::card::Flashcard;

/// Prompt shown after the table.
pub const PROMPT: &str = "Do they look ok? (y/n): ";

/// Operator's answer to the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Aborted,
}

impl Decision {
    /// `Confirmed` only if the first token of `line` is `y` or `Y`.
    pub fn from_reply(line: &str) -> Self {
        match line.split_whitespace().next() {
            Some(token) if token.eq_ignore_ascii_case("y") => Decision::Confirmed,
            _ => Decision::Aborted,
        }
    }
}

/// Source of the confirmation decision.
///
/// Any `FnMut(&str) -> Decision` closure works, which is how tests drive the
/// preview without a terminal.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Decision;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Decision,
{
    fn confirm(&mut self, prompt: &str) -> Decision {
        self(prompt)
    }
}

/// Writes the prompt to `output` and reads a single line from `input`.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, answer from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Decision {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|()| self.output.flush()) {
            tracing::warn!("could not write confirmation prompt: {}", e);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => Decision::from_reply(&line),
            Err(e) => {
                tracing::warn!("error getting response from user: {}", e);
                Decision::Aborted
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("write preview: {0}")]
pub struct PreviewError(#[from] io::Error);

/// Print the card table to `out`, then block on `confirm`.
pub fn preview<W: Write, C: Confirm + ?Sized>(
    cards: &[Flashcard],
    out: &mut W,
    confirm: &mut C,
) -> Result<Decision, PreviewError> {
    writeln!(out, "Preview of flashcards:")?;
    render_table(cards, out)?;
    out.flush()?;
    let decision = confirm.confirm(PROMPT);
    tracing::debug!("preview of {} card(s): {:?}", cards.len(), decision);
    Ok(decision)
}
