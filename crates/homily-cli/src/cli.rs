//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Homily CLI - Generate sermons and structure generated sermon text.
#[derive(Debug, Parser)]
#[command(name = "homily")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (titles only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Structure already generated sermon text
    Extract(ExtractArgs),

    /// Generate a sermon through the configured provider
    Generate(GenerateArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text file to read
    #[arg(short, long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the text from stdin (the default when no file is given)
    #[arg(long)]
    pub stdin: bool,

    /// Title used when the text has none
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Bible reference copied into the document
    #[arg(short, long, default_value = "")]
    pub reference: String,

    /// Keep every citation line of a point instead of only the last one
    #[arg(long)]
    pub merge_citations: bool,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Sermon theme
    #[arg(short, long)]
    pub theme: String,

    /// Main bible passage
    #[arg(short, long)]
    pub passage: String,

    /// Homiletic style (expositivo, temático, textual, narrativo, ...)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Approximate duration in minutes
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// Additional notes for the preacher's context
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
