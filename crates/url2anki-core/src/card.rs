use serde::{Deserialize, Serialize};

/// A single question/answer pair scraped from a page.
///
/// Both fields hold normalized plain text. Cards are only built by the
/// pairing stage (or deserialized back from an export) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_question_before_answer() {
        let card = Flashcard::new("What is a Pod?", "The smallest deployable unit.");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(
            json,
            r#"{"question":"What is a Pod?","answer":"The smallest deployable unit."}"#
        );
    }
}
