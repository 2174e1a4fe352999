//! scraper (html5ever) backed document.

use std::io::Read;

use scraper::{ElementRef, Html, Selector};

use super::{ParseError, SelectorEvaluator, TextNode};

/// An HTML page parsed into a DOM tree.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Read `body` to the end and parse it.
    ///
    /// html5ever recovers from malformed markup, so only a failing read is
    /// an error. Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn read(mut body: impl Read) -> Result<Self, ParseError> {
        let mut bytes = Vec::new();
        body.read_to_end(&mut bytes)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl TextNode for ElementRef<'_> {
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

impl SelectorEvaluator for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn select<'a>(&'a self, selector: &str) -> Result<Vec<ElementRef<'a>>, ParseError> {
        // A blank selector is accepted and matches nothing.
        if selector.trim().is_empty() {
            return Ok(Vec::new());
        }
        let parsed = Selector::parse(selector).map_err(|e| ParseError::Selector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.html.select(&parsed).collect())
    }
}
