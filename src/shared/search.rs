//! Case-insensitive substring search over question text.

use crate::features::questions::models::Question;

/// A normalized search term: trimmed and lowercased. An empty term matches everything.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    /// Keep the questions whose text contains the term, preserving order.
    pub fn apply(&self, questions: Vec<Question>) -> Vec<Question> {
        questions
            .into_iter()
            .filter(|q| self.matches(&q.question))
            .collect()
    }
}
