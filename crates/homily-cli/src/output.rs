//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use homily_extractor::SermonDocument;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a sermon document.
    pub fn format_document(&self, doc: &SermonDocument) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
            OutputFormat::Text => Ok(self.format_document_text(doc)),
            OutputFormat::Quiet => Ok(self.format_document_quiet(doc)),
        }
    }

    fn format_document_text(&self, doc: &SermonDocument) -> String {
        let mut out = Vec::new();

        out.push(self.colorize(&doc.title, "cyan"));
        if !doc.bible_reference.is_empty() {
            out.push(doc.bible_reference.clone());
        }

        if !doc.introduction.is_empty() {
            out.push(String::new());
            out.push(self.heading("Introdução"));
            out.push(doc.introduction.clone());
        }

        if !doc.points.is_empty() {
            out.push(String::new());
            out.push(self.points_table(doc));

            for (i, point) in doc.points.iter().enumerate() {
                out.push(String::new());
                out.push(self.heading(&format!("{}. {}", i + 1, point.title)));
                if !point.content.is_empty() {
                    out.push(point.content.clone());
                }
            }
        }

        if !doc.conclusion.is_empty() {
            out.push(String::new());
            out.push(self.heading("Conclusão"));
            out.push(doc.conclusion.clone());
        }

        if !doc.application_questions.is_empty() {
            out.push(String::new());
            out.push(self.heading("Perguntas para Reflexão"));
            for (i, question) in doc.application_questions.iter().enumerate() {
                out.push(format!("{}. {}", i + 1, question));
            }
        }

        if doc.is_empty() {
            out.push(String::new());
            out.push(self.warning("No sermon sections recognized in the text."));
        }

        out.join("\n")
    }

    /// Summary table: one row per point.
    fn points_table(&self, doc: &SermonDocument) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Ponto", "Referências"]);

        for (i, point) in doc.points.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                point.title.clone(),
                point.bible_references.join("; "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Title and point titles only.
    fn format_document_quiet(&self, doc: &SermonDocument) -> String {
        std::iter::once(doc.title.as_str())
            .chain(doc.points.iter().map(|p| p.title.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}
