//! Accumulation of discussion questions

use crate::types::append_spaced;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]\s*").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s+").unwrap());

/// Builds the ordered question list from the lines of a questions section.
///
/// Numbered ("1." / "1)") and bulleted ("- ") lines open a new question.
/// Unmarked lines continue the most recent question; an unmarked line with
/// no question before it opens the first one.
#[derive(Debug, Clone, Default)]
pub struct QuestionAccumulator {
    questions: Vec<String>,
}

impl QuestionAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one trimmed, non-empty content line
    pub fn push(&mut self, line: &str) {
        if let Some(m) = NUMBERED_RE.find(line).or_else(|| BULLET_RE.find(line)) {
            self.questions.push(line[m.end()..].trim().to_string());
            return;
        }

        match self.questions.last_mut() {
            Some(last) => append_spaced(last, line),
            None => self.questions.push(line.to_string()),
        }
    }

    /// Number of questions opened so far
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when no question has been opened
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Finish, dropping entries that never received any text (a bare "3.")
    pub fn into_questions(self) -> Vec<String> {
        self.questions
            .into_iter()
            .filter(|q| !q.is_empty())
            .collect()
    }
}
