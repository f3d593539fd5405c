//! Homily Server binary
//!
//! Starts the HTTP server for sermon generation and extraction.

use anyhow::Context;
use homily_server::{config::ServerConfig, start_server};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        ServerConfig::from_file(config_path)
            .with_context(|| format!("loading {}", config_path))?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        return Ok(());
    } else {
        tracing::warn!("No config file specified, using defaults");
        ServerConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Homily Server - Sermon generation and extraction API");
    println!();
    println!("USAGE:");
    println!("    homily-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    GEMINI_API_KEY     API key for the Gemini provider (required)");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /generate-sermon  {{theme, biblePassage, sermonType, duration, additionalNotes}}");
    println!("    POST /extract          {{text, title, bibleReference}}");
    println!("    GET  /health");
    println!();
}
