//! Homily Extractor
//!
//! Converts loosely structured sermon text produced by an LLM into a
//! structured [`SermonDocument`].
//!
//! # Overview
//!
//! Generated text rarely follows an outline exactly. The extractor reads it
//! line by line, recognizes section headings ("Introdução", "Conclusão",
//! "Perguntas"), numbered points, and citation lines, and fills in whatever
//! it finds. It never fails: unrecognized text leaves fields empty.
//!
//! # Architecture
//!
//! ```text
//! SermonRequest → PromptBuilder → LlmProvider → text → SermonParser → SermonDocument
//! ```
//!
//! The parser half is pure and synchronous; [`SermonGenerator`] adds the
//! prompt, the provider call, and a timeout around it.
//!
//! # Example Usage
//!
//! ```
//! use homily_extractor::extract_sermon;
//!
//! let text = "# Título: Fé Inabalável\n\
//!             Introdução\n\
//!             A fé nos sustenta.\n\
//!             1. A Natureza da Fé\n\
//!             Referências: Hebreus 11:1-3, Romanos 10:17";
//!
//! let doc = extract_sermon(text, "Fé", "Hebreus 11:1-6");
//! assert_eq!(doc.title, "Fé Inabalável");
//! assert_eq!(doc.points[0].bible_references, vec!["Hebreus 11:1-3", "Romanos 10:17"]);
//! ```

#![warn(missing_docs)]

mod assembler;
mod classifier;
mod config;
mod error;
mod generator;
mod prompt;
mod questions;
mod references;
mod title;
mod types;


pub use assembler::{extract_sermon, CitationPolicy, SermonParser};
pub use classifier::{classify_line, matching_rule, LineKind, ParseState};
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::SermonGenerator;
pub use prompt::PromptBuilder;
pub use questions::QuestionAccumulator;
pub use references::extract_references;
pub use title::resolve_title;
pub use types::{SermonDocument, SermonPoint};
