//! Selector evaluation over a parsed page.
//!
//! The pipeline only depends on [`SelectorEvaluator`] and [`TextNode`];
//! [`HtmlDocument`] is the scraper-backed implementation.

mod html;

pub use html::HtmlDocument;

use std::io;

/// A matched node whose text content can be read.
pub trait TextNode {
    /// Concatenated text of the node and all its descendants, unmodified.
    fn text(&self) -> String;
}

/// A parsed document that can answer CSS selector queries.
pub trait SelectorEvaluator {
    type Node<'a>: TextNode
    where
        Self: 'a;

    /// All nodes matching `selector`, in document order.
    fn select<'a>(&'a self, selector: &str) -> Result<Vec<Self::Node<'a>>, ParseError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The response body could not be read as HTML.
    #[error("read page body: {0}")]
    Read(#[from] io::Error),
    /// The selector is not valid CSS.
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}

/// Question and answer matches, each in document order.
pub struct Extracted<N> {
    pub questions: Vec<N>,
    pub answers: Vec<N>,
}

/// Evaluate both selectors independently against `doc`.
///
/// No cross-checking happens here: differing counts (including zero on one
/// side) are reported by the pairing stage.
pub fn extract<'a, D: SelectorEvaluator>(
    doc: &'a D,
    question_selector: &str,
    answer_selector: &str,
) -> Result<Extracted<D::Node<'a>>, ParseError> {
    let questions = doc.select(question_selector)?;
    let answers = doc.select(answer_selector)?;
    tracing::debug!(
        "selector {:?} matched {} node(s), {:?} matched {}",
        question_selector,
        questions.len(),
        answer_selector,
        answers.len()
    );
    Ok(Extracted { questions, answers })
}
