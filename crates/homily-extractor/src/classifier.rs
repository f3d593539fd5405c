//! Line classification for generated sermon text
//!
//! Each trimmed line is tested against an ordered table of rules; the first
//! rule that matches decides the line's kind. Section and point markers come
//! before everything else, and citation lines are only recognized inside a
//! point so an introduction that mentions "referências" stays prose.

use regex::Regex;
use std::sync::LazyLock;

static INTRODUCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:#+\s*)?[*_]*introdu[çc][ãa]o").unwrap());
static CONCLUSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:#+\s*)?[*_]*conclus[ãa]o").unwrap());
static QUESTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:#+\s*)?[*_]*(?:perguntas|aplica[çc][ãa]o)").unwrap());
static NUMBERED_POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:#+\s*)?[*_]*\d+\.\s+(.*)$").unwrap());
static EXPLICIT_POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:#+\s*)?[*_]*ponto\s*\d+\s*[:.\-–]?\s*(.*)$").unwrap());
static CITATION_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)refer[êe]ncias?|passagens").unwrap());

/// Region of the sermon the assembler is currently filling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseState {
    /// Opening paragraph (initial state)
    #[default]
    Introduction,
    /// Inside the main points
    Points,
    /// Closing paragraph
    Conclusion,
    /// Reflection/application questions
    Questions,
}

/// What a single line means to the assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// "Introdução" heading
    SectionIntro,
    /// "Conclusão" heading
    SectionConclusion,
    /// "Perguntas" / "Aplicação" heading
    SectionQuestions,
    /// Start of a numbered or "Ponto N" point, carrying the point title
    PointStart(String),
    /// A line listing the current point's supporting citations
    ReferenceLine,
    /// Anything else: prose to append to the open section
    Content,
}

/// A classification rule: yields a kind when the line matches
type Rule = fn(&str, ParseState) -> Option<LineKind>;

/// Rules in priority order; the first match wins.
const RULES: &[(&str, Rule)] = &[
    ("introduction-marker", introduction_marker),
    ("conclusion-marker", conclusion_marker),
    ("questions-marker", questions_marker),
    ("point-marker", point_marker),
    ("citation-line", citation_line),
];

/// Classify one trimmed, non-empty line given the current state.
///
/// Callers skip empty lines before classifying; an empty line falls through
/// to [`LineKind::Content`].
pub fn classify_line(line: &str, state: ParseState) -> LineKind {
    RULES
        .iter()
        .find_map(|(_, rule)| rule(line, state))
        .unwrap_or(LineKind::Content)
}

/// Name of the rule that claims `line`, or `None` when it is plain content.
pub fn matching_rule(line: &str, state: ParseState) -> Option<&'static str> {
    RULES
        .iter()
        .find(|(_, rule)| rule(line, state).is_some())
        .map(|(name, _)| *name)
}

/// True when `line` is any section or point marker, regardless of state
pub fn is_structural_marker(line: &str) -> bool {
    matches!(
        classify_line(line, ParseState::Introduction),
        LineKind::SectionIntro
            | LineKind::SectionConclusion
            | LineKind::SectionQuestions
            | LineKind::PointStart(_)
    )
}

/// True when `line` opens an introduction section
pub fn is_introduction_marker(line: &str) -> bool {
    INTRODUCTION_RE.is_match(line)
}

fn introduction_marker(line: &str, _state: ParseState) -> Option<LineKind> {
    is_introduction_marker(line).then_some(LineKind::SectionIntro)
}

fn conclusion_marker(line: &str, _state: ParseState) -> Option<LineKind> {
    CONCLUSION_RE.is_match(line).then_some(LineKind::SectionConclusion)
}

fn questions_marker(line: &str, _state: ParseState) -> Option<LineKind> {
    QUESTIONS_RE.is_match(line).then_some(LineKind::SectionQuestions)
}

fn point_marker(line: &str, state: ParseState) -> Option<LineKind> {
    if let Some(caps) = NUMBERED_POINT_RE.captures(line) {
        // Numbered questions share the "N." shape with points.
        if state == ParseState::Questions && line.contains('?') {
            return None;
        }
        return Some(LineKind::PointStart(point_title(&caps[1])));
    }

    EXPLICIT_POINT_RE
        .captures(line)
        .map(|caps| LineKind::PointStart(point_title(&caps[1])))
}

/// True for a bare "N. text" line: no heading mark or emphasis before the number
pub(crate) fn is_plain_numbered(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit()) && NUMBERED_POINT_RE.is_match(line)
}

/// Point title without surrounding whitespace or `**` emphasis
fn point_title(rest: &str) -> String {
    rest.trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .to_string()
}

fn citation_line(line: &str, state: ParseState) -> Option<LineKind> {
    (state == ParseState::Points && CITATION_KEYWORD_RE.is_match(line))
        .then_some(LineKind::ReferenceLine)
}
