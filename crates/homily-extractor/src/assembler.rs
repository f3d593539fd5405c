//! Document assembly: the single-pass state machine over generated text
//!
//! Lines are read top to bottom. Section markers move the parser between
//! introduction, points, conclusion and questions; point markers open a new
//! point; everything else is appended to whatever is open. Nothing here can
//! fail: text that does not look like a sermon simply leaves fields empty.

use crate::classifier::{classify_line, is_plain_numbered, LineKind, ParseState};
use crate::questions::QuestionAccumulator;
use crate::references::extract_references;
use crate::title::{find_title_line, TitleLine};
use crate::types::{append_spaced, SermonDocument, SermonPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a second citation line for the same point is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationPolicy {
    /// The latest non-empty citation line wins
    #[default]
    Replace,
    /// Every citation line is appended in order
    Merge,
}

/// Reusable sermon parser
///
/// Holds no state between calls; each [`parse`](SermonParser::parse) owns its
/// own assembly pass, so one parser can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SermonParser {
    citation_policy: CitationPolicy,
}

impl SermonParser {
    /// Create a parser with the default (replace) citation policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the citation policy
    pub fn with_citation_policy(mut self, policy: CitationPolicy) -> Self {
        self.citation_policy = policy;
        self
    }

    /// Citation policy in effect
    pub fn citation_policy(&self) -> CitationPolicy {
        self.citation_policy
    }

    /// Parse generated text into a [`SermonDocument`].
    ///
    /// `fallback_title` is used when the text does not open with a usable
    /// title line; `fallback_reference` is copied into `bible_reference`
    /// untouched.
    pub fn parse(
        &self,
        raw_text: &str,
        fallback_title: &str,
        fallback_reference: &str,
    ) -> SermonDocument {
        let title_line = find_title_line(raw_text);
        let title_index = title_line.as_ref().map(|t| t.index);
        let title = title_line
            .and_then(TitleLine::title)
            .unwrap_or_else(|| fallback_title.to_string());

        let mut assembly = Assembly::new(self.citation_policy);

        for (index, line) in raw_text.lines().map(str::trim).enumerate() {
            if line.is_empty() || Some(index) == title_index || line == title {
                continue;
            }
            assembly.feed(line);
        }

        let document = assembly.finish(title, fallback_reference.to_string());

        debug!(
            "Assembled sermon '{}': {} points, {} citations, {} questions",
            document.title,
            document.points.len(),
            document.reference_count(),
            document.application_questions.len()
        );

        document
    }
}

/// Extract a structured sermon from generated text.
///
/// Total over all inputs: empty or unrecognizable text yields a document
/// carrying only the fallback title and the given reference.
pub fn extract_sermon(
    raw_text: &str,
    fallback_title: &str,
    fallback_reference: &str,
) -> SermonDocument {
    SermonParser::default().parse(raw_text, fallback_title, fallback_reference)
}

/// Mutable state of one assembly pass
struct Assembly {
    policy: CitationPolicy,
    state: ParseState,
    current_point: Option<SermonPoint>,
    introduction: String,
    points: Vec<SermonPoint>,
    conclusion: String,
    questions: QuestionAccumulator,
}

impl Assembly {
    fn new(policy: CitationPolicy) -> Self {
        Self {
            policy,
            state: ParseState::Introduction,
            current_point: None,
            introduction: String::new(),
            points: Vec::new(),
            conclusion: String::new(),
            questions: QuestionAccumulator::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        match classify_line(line, self.state) {
            // Once questions are listed, a bare numbered line is the next one
            LineKind::PointStart(_) if self.continues_questions(line) => self.questions.push(line),
            LineKind::SectionIntro => self.enter(ParseState::Introduction),
            LineKind::SectionConclusion => self.enter(ParseState::Conclusion),
            LineKind::SectionQuestions => self.enter(ParseState::Questions),
            LineKind::PointStart(title) => {
                self.finalize_point();
                self.current_point = Some(SermonPoint::new(title));
                self.state = ParseState::Points;
            }
            LineKind::ReferenceLine => self.add_references(line),
            LineKind::Content => self.add_content(line),
        }
    }

    fn continues_questions(&self, line: &str) -> bool {
        self.state == ParseState::Questions && !self.questions.is_empty() && is_plain_numbered(line)
    }

    /// Move to a section, closing any open point
    fn enter(&mut self, state: ParseState) {
        self.finalize_point();
        self.state = state;
    }

    fn finalize_point(&mut self) {
        if let Some(point) = self.current_point.take() {
            self.points.push(point);
        }
    }

    fn add_references(&mut self, line: &str) {
        let refs = extract_references(line);
        if refs.is_empty() {
            return;
        }
        if let Some(point) = self.current_point.as_mut() {
            match self.policy {
                CitationPolicy::Replace => point.bible_references = refs,
                CitationPolicy::Merge => point.bible_references.extend(refs),
            }
        }
    }

    fn add_content(&mut self, line: &str) {
        match self.state {
            ParseState::Introduction => append_spaced(&mut self.introduction, line),
            ParseState::Conclusion => append_spaced(&mut self.conclusion, line),
            ParseState::Points => {
                if let Some(point) = self.current_point.as_mut() {
                    append_spaced(&mut point.content, line);
                }
            }
            ParseState::Questions => self.questions.push(line),
        }
    }

    fn finish(mut self, title: String, bible_reference: String) -> SermonDocument {
        self.finalize_point();

        SermonDocument {
            title,
            bible_reference,
            introduction: self.introduction,
            points: self.points,
            conclusion: self.conclusion,
            application_questions: self.questions.into_questions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SERMON: &str = "\
# Título: Fé Inabalável

## Introdução
Vivemos dias de incerteza.
A fé nos sustenta.

## 1. A Natureza da Fé
A fé é a certeza das coisas que se esperam.
Referências: Hebreus 11:1-3, Romanos 10:17

## 2. Fé em Meio às Provações
Abraão creu contra a esperança.
Referências bíblicas: Romanos 4:18; Tiago 1:2-4

## 3. Como Desenvolver uma Fé Autêntica
Ouvindo a Palavra.

## Conclusão
Permaneça firme.
Deus é fiel.

## Perguntas para Reflexão
1. Onde sua fé tem sido provada?
2. Que promessa você precisa lembrar hoje?
Pense com calma.
";

    #[test]
    fn test_full_sermon() {
        let doc = extract_sermon(FULL_SERMON, "Fé", "Hebreus 11:1-6");

        assert_eq!(doc.title, "Fé Inabalável");
        assert_eq!(doc.bible_reference, "Hebreus 11:1-6");
        assert_eq!(doc.introduction, "Vivemos dias de incerteza. A fé nos sustenta.");
        assert_eq!(doc.points.len(), 3);

        assert_eq!(doc.points[0].title, "A Natureza da Fé");
        assert_eq!(doc.points[0].content, "A fé é a certeza das coisas que se esperam.");
        assert_eq!(doc.points[0].bible_references, vec!["Hebreus 11:1-3", "Romanos 10:17"]);

        assert_eq!(doc.points[1].bible_references, vec!["Romanos 4:18", "Tiago 1:2-4"]);

        assert_eq!(doc.points[2].title, "Como Desenvolver uma Fé Autêntica");
        assert!(doc.points[2].bible_references.is_empty());

        assert_eq!(doc.conclusion, "Permaneça firme. Deus é fiel.");
        assert_eq!(
            doc.application_questions,
            vec![
                "Onde sua fé tem sido provada?",
                "Que promessa você precisa lembrar hoje? Pense com calma."
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let doc = extract_sermon("", "Tema", "João 3:16");
        assert_eq!(
            doc,
            SermonDocument {
                title: "Tema".to_string(),
                bible_reference: "João 3:16".to_string(),
                ..SermonDocument::default()
            }
        );
    }

    #[test]
    fn test_introduction_only() {
        let doc = extract_sermon("Introdução\nTexto A.\nTexto B.", "Tema", "");
        assert_eq!(doc.title, "Tema");
        assert_eq!(doc.introduction, "Texto A. Texto B.");
        assert!(doc.points.is_empty());
        assert!(doc.conclusion.is_empty());
        assert!(doc.application_questions.is_empty());
    }

    #[test]
    fn test_title_line_not_repeated_in_introduction() {
        let doc = extract_sermon("# Título: Graça\nA graça basta.", "Tema", "");
        assert_eq!(doc.title, "Graça");
        assert_eq!(doc.introduction, "A graça basta.");
    }

    #[test]
    fn test_label_only_title_line_is_skipped() {
        let doc = extract_sermon("# Título:\nA graça basta.", "Graça", "");
        assert_eq!(doc.title, "Graça");
        assert_eq!(doc.introduction, "A graça basta.");
    }

    #[test]
    fn test_lines_equal_to_title_are_skipped() {
        let doc = extract_sermon("Introdução\nGraça\nA graça basta.", "Graça", "");
        assert_eq!(doc.introduction, "A graça basta.");
    }

    #[test]
    fn test_unmarked_text_goes_to_introduction() {
        let doc = extract_sermon("Sermão sobre a fé\nPrimeira frase.\nSegunda frase.", "Tema", "");
        assert_eq!(doc.title, "Sermão sobre a fé");
        assert_eq!(doc.introduction, "Primeira frase. Segunda frase.");
    }

    #[test]
    fn test_point_closed_by_conclusion_is_kept() {
        let doc = extract_sermon("1. Único Ponto\nCorpo.\nConclusão\nFim.", "Tema", "");
        assert_eq!(doc.points.len(), 1);
        assert_eq!(doc.points[0].content, "Corpo.");
        assert_eq!(doc.conclusion, "Fim.");
    }

    #[test]
    fn test_point_start_finalizes_previous_point() {
        let doc = extract_sermon("Ponto 1: Primeiro\nA.\nPonto 2: Segundo\nB.", "Tema", "");
        assert_eq!(doc.points.len(), 2);
        assert_eq!(doc.points[0].title, "Primeiro");
        assert_eq!(doc.points[0].content, "A.");
        assert_eq!(doc.points[1].title, "Segundo");
        assert_eq!(doc.points[1].content, "B.");
    }

    #[test]
    fn test_point_from_questions_section() {
        let text = "Perguntas\n1. Por quê?\n## 3. Como Desenvolver uma Fé Autêntica\nCorpo.";
        let doc = extract_sermon(text, "Tema", "");
        assert_eq!(doc.application_questions, vec!["Por quê?"]);
        assert_eq!(doc.points.len(), 1);
        assert_eq!(doc.points[0].title, "Como Desenvolver uma Fé Autêntica");
        assert_eq!(doc.points[0].content, "Corpo.");
    }

    #[test]
    fn test_point_after_empty_questions_heading() {
        let doc = extract_sermon("Perguntas\n3. Como Desenvolver uma Fé Autêntica\nCorpo.", "Tema", "");
        assert!(doc.application_questions.is_empty());
        assert_eq!(doc.points[0].title, "Como Desenvolver uma Fé Autêntica");
    }

    #[test]
    fn test_question_with_trailing_citation() {
        let text = "Perguntas\n1. Onde sua fé tem sido provada? (Tiago 1:2-4)\n2. Que promessa você precisa lembrar hoje?";
        let doc = extract_sermon(text, "Tema", "");
        assert!(doc.points.is_empty());
        assert_eq!(
            doc.application_questions,
            vec![
                "Onde sua fé tem sido provada? (Tiago 1:2-4)",
                "Que promessa você precisa lembrar hoje?"
            ]
        );
    }

    #[test]
    fn test_imperative_question() {
        let text = "Perguntas\n\
                    1. Onde sua fé tem sido provada? (Tiago 1:2-4)\n\
                    2. Que promessa você precisa lembrar hoje?\n\
                    3. Reflita sobre sua caminhada.\n\
                    4. Qual passo você dará esta semana?";
        let doc = extract_sermon(text, "Tema", "");
        assert!(doc.points.is_empty());
        assert_eq!(doc.application_questions.len(), 4);
        assert_eq!(doc.application_questions[2], "Reflita sobre sua caminhada.");
    }

    #[test]
    fn test_references_in_introduction_stay_prose() {
        let doc = extract_sermon("Introdução\nVeremos várias passagens hoje.", "Tema", "");
        assert_eq!(doc.introduction, "Veremos várias passagens hoje.");
    }

    #[test]
    fn test_reference_line_replaces_by_default() {
        let text = "1. Ponto\nReferências: João 1:1\nReferências: Atos 2:38, Atos 4:12";
        let doc = extract_sermon(text, "Tema", "");
        assert_eq!(doc.points[0].bible_references, vec!["Atos 2:38", "Atos 4:12"]);
        assert_eq!(doc.points[0].content, "");
    }

    #[test]
    fn test_reference_line_merge_policy() {
        let text = "1. Ponto\nReferências: João 1:1\nReferências: Atos 2:38, João 1:1";
        let doc = SermonParser::new()
            .with_citation_policy(CitationPolicy::Merge)
            .parse(text, "Tema", "");
        assert_eq!(
            doc.points[0].bible_references,
            vec!["João 1:1", "Atos 2:38", "João 1:1"]
        );
    }

    #[test]
    fn test_empty_reference_line_keeps_previous() {
        let text = "1. Ponto\nReferências: João 1:1\nReferências:";
        let doc = extract_sermon(text, "Tema", "");
        assert_eq!(doc.points[0].bible_references, vec!["João 1:1"]);
    }

    #[test]
    fn test_reenter_introduction_appends() {
        let doc = extract_sermon("Introdução\nA.\nConclusão\nB.\nIntrodução\nC.", "Tema", "");
        assert_eq!(doc.introduction, "A. C.");
        assert_eq!(doc.conclusion, "B.");
    }

    #[test]
    fn test_crlf_and_indentation() {
        let doc = extract_sermon("Introdução\r\n   Texto A.  \r\n\r\n\tTexto B.\r\n", "Tema", "");
        assert_eq!(doc.introduction, "Texto A. Texto B.");
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = SermonParser::new();
        let first = parser.parse(FULL_SERMON, "Fé", "Hebreus 11");
        let second = parser.parse(FULL_SERMON, "Fé", "Hebreus 11");
        assert_eq!(first, second);
        assert_eq!(parser.citation_policy(), CitationPolicy::Replace);
    }
}
