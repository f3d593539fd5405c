//! Structured sermon document produced by extraction

use serde::{Deserialize, Serialize};

/// One topical point of a sermon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SermonPoint {
    /// Point title, with its numbering marker stripped
    pub title: String,

    /// Body text, space-joined from every content line of the point
    pub content: String,

    /// Supporting citations in the order they were written; duplicates kept
    pub bible_references: Vec<String>,
}

impl SermonPoint {
    /// Start a new point with an empty body and no citations
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A sermon recovered from loosely structured text
///
/// Every field always holds a value: strings default to empty and lists to
/// empty lists, so a document is well-formed even when nothing was recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SermonDocument {
    /// Sermon title
    pub title: String,

    /// Main passage, copied from the request without parsing
    pub bible_reference: String,

    /// Introduction paragraph
    pub introduction: String,

    /// Main points in source order
    pub points: Vec<SermonPoint>,

    /// Conclusion paragraph
    pub conclusion: String,

    /// Reflection and application questions in source order
    pub application_questions: Vec<String>,
}

impl SermonDocument {
    /// True when no content section was recovered (title and reference aside)
    pub fn is_empty(&self) -> bool {
        self.introduction.is_empty()
            && self.points.is_empty()
            && self.conclusion.is_empty()
            && self.application_questions.is_empty()
    }

    /// Total citations across all points
    pub fn reference_count(&self) -> usize {
        self.points.iter().map(|p| p.bible_references.len()).sum()
    }
}

/// Append `text` to a running paragraph, separated by a single space
pub(crate) fn append_spaced(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}
