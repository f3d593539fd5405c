//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use homily_extractor::{CitationPolicy, SermonParser};
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;
    debug!("Read {} bytes of sermon text", text.len());

    let policy = if args.merge_citations {
        CitationPolicy::Merge
    } else {
        config.generator.citation_policy
    };

    let document = SermonParser::new()
        .with_citation_policy(policy)
        .parse(&text, &args.title, &args.reference);

    println!("{}", formatter.format_document(&document)?);

    Ok(())
}

/// Read the sermon text from the given file, or from stdin.
fn read_input(args: &ExtractArgs) -> Result<String> {
    match &args.file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
