//! Sermon request - what a caller asks the generator for

use crate::style::SermonStyle;
use std::fmt;

/// Default sermon duration in minutes
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// A request for a generated sermon
///
/// `theme` doubles as the fallback title and `passage` is copied verbatim
/// into the resulting document's bible reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SermonRequest {
    /// Sermon theme (e.g., "Fé em tempos difíceis")
    pub theme: String,

    /// Main bible passage (e.g., "Hebreus 11:1-6")
    pub passage: String,

    /// Homiletic style
    pub style: SermonStyle,

    /// Approximate duration in minutes
    pub duration_minutes: u32,

    /// Free-form notes for the generator
    pub notes: Option<String>,
}

/// Reasons a request is rejected before generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Theme is empty or whitespace
    EmptyTheme,
    /// Passage is empty or whitespace
    EmptyPassage,
    /// Duration of zero minutes
    ZeroDuration,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EmptyTheme => write!(f, "theme must not be empty"),
            RequestError::EmptyPassage => write!(f, "bible passage must not be empty"),
            RequestError::ZeroDuration => write!(f, "duration must be greater than 0"),
        }
    }
}

impl std::error::Error for RequestError {}

impl SermonRequest {
    /// Create a request with default style and duration
    pub fn new(theme: impl Into<String>, passage: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            passage: passage.into(),
            style: SermonStyle::default(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            notes: None,
        }
    }

    /// Set the homiletic style
    pub fn with_style(mut self, style: SermonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the approximate duration in minutes
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Attach additional notes; blank notes are treated as absent
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        self
    }

    /// Validate the request
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.theme.trim().is_empty() {
            return Err(RequestError::EmptyTheme);
        }
        if self.passage.trim().is_empty() {
            return Err(RequestError::EmptyPassage);
        }
        if self.duration_minutes == 0 {
            return Err(RequestError::ZeroDuration);
        }
        Ok(())
    }
}
