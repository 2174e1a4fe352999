//! Positional pairing of question and answer nodes into cards.

use crate::card::Flashcard;
use crate::extract::TextNode;

/// The two selectors matched a different number of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "the number of questions and answers do not match ({question_count} questions, {answer_count} answers)"
)]
pub struct CountMismatch {
    pub question_count: usize,
    pub answer_count: usize,
}

/// Strip `\n` and `\r\n` sequences, then trim surrounding whitespace.
///
/// Newlines are removed before trimming so a whitespace-only line collapses
/// to nothing instead of leaving a space behind.
pub fn normalize(text: &str) -> String {
    text.replace('\n', "").replace("\r\n", "").trim().to_string()
}

/// Zip `questions[i]` with `answers[i]` for every index.
///
/// Fails without producing any cards when the counts differ; a shorter list
/// is never padded or truncated.
pub fn pair<Q: TextNode, A: TextNode>(
    questions: &[Q],
    answers: &[A],
) -> Result<Vec<Flashcard>, CountMismatch> {
    if questions.len() != answers.len() {
        return Err(CountMismatch {
            question_count: questions.len(),
            answer_count: answers.len(),
        });
    }

    Ok(questions
        .iter()
        .zip(answers)
        .map(|(q, a)| Flashcard::new(normalize(&q.text()), normalize(&a.text())))
        .collect())
}
