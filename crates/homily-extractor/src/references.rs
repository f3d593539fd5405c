//! Citation extraction for point reference lines

use regex::Regex;
use std::sync::LazyLock;

/// Leading label, e.g. "Referências bíblicas:" or a bare "Referências".
/// The label never contains a digit, so the colon of "João 3:16" is not taken
/// for the end of a label. Tolerates markdown bullets/emphasis around it.
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[-*•_\s]*(?:refer[êe]ncias?|passagens)(?:[^:\d]*:)?[*_]*\s*").unwrap()
});

/// Split a citation line into individual citations.
///
/// The label is removed, the remainder is split on commas and semicolons,
/// and each fragment is trimmed. Empty fragments are dropped, so a bare
/// label yields an empty list. Citations are opaque: "Hebreus 11:1-3" is
/// kept as written.
pub fn extract_references(line: &str) -> Vec<String> {
    let body = LABEL_RE.replace(line.trim(), "");

    body.split([',', ';'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
