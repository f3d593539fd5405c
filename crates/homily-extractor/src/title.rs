//! Title resolution from the first line of generated text

use crate::classifier::is_structural_marker;
use regex::Regex;
use std::sync::LazyLock;

static HEADING_MARK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());
static TITLE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^t[íi]tulo\s*:[*_]*\s*").unwrap());

const EMPHASIS: &[char] = &['*', '_'];

/// The line holding the title, and the title left after stripping
///
/// `title` is empty for a label-only line such as "# Título:"; the line is
/// still consumed, and the fallback title applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TitleLine {
    pub index: usize,
    pub title: String,
}

impl TitleLine {
    /// The stripped title, unless nothing was left
    pub fn title(self) -> Option<String> {
        (!self.title.is_empty()).then_some(self.title)
    }
}

/// Decide the document title.
///
/// The first non-empty line becomes the title, minus any leading `#` marks,
/// "Título:" label and surrounding `**` emphasis, unless it is a section or point marker or nothing
/// is left after stripping. In those cases `fallback` is returned unchanged.
pub fn resolve_title(raw_text: &str, fallback: &str) -> String {
    find_title_line(raw_text)
        .and_then(TitleLine::title)
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn find_title_line(raw_text: &str) -> Option<TitleLine> {
    let (index, line) = raw_text
        .lines()
        .map(str::trim)
        .enumerate()
        .find(|(_, line)| !line.is_empty())?;

    if is_structural_marker(line) {
        return None;
    }

    let without_heading = HEADING_MARK_RE.replace(line, "");
    let unemphasized = without_heading.trim_start_matches(EMPHASIS);
    let title = TITLE_LABEL_RE
        .replace(unemphasized, "")
        .trim_matches(EMPHASIS)
        .trim()
        .to_string();

    Some(TitleLine { index, title })
}
