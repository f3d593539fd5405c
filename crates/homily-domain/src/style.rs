//! Style module - homiletic styles a sermon can be requested in

use std::fmt;

/// Homiletic style of a requested sermon
///
/// The well-known styles have their own variants; anything else the caller
/// types is carried verbatim so the prompt can still mention it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SermonStyle {
    /// Verse-by-verse exposition of a passage
    #[default]
    Expository,

    /// Organized around a theme drawn from several passages
    Topical,

    /// Points taken directly from the words of a single text
    Textual,

    /// Retells a biblical narrative
    Narrative,

    /// Any other style, kept as written
    Other(String),
}

impl SermonStyle {
    /// Get the style name as used in the generation prompt
    pub fn as_str(&self) -> &str {
        match self {
            SermonStyle::Expository => "expositivo",
            SermonStyle::Topical => "temático",
            SermonStyle::Textual => "textual",
            SermonStyle::Narrative => "narrativo",
            SermonStyle::Other(s) => s.as_str(),
        }
    }

    /// Parse a style, accepting English and Portuguese names case-insensitively.
    ///
    /// Never fails: unknown names become [`SermonStyle::Other`].
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "expository" | "expositivo" | "expositiva" => SermonStyle::Expository,
            "topical" | "temático" | "tematico" | "temática" | "tematica" => SermonStyle::Topical,
            "textual" => SermonStyle::Textual,
            "narrative" | "narrativo" | "narrativa" => SermonStyle::Narrative,
            _ => SermonStyle::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for SermonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
