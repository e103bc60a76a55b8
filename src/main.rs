use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use whentoexpect::{PluginConfig, WhenToExpect};

/// How many tries until an event happens, for the launcher.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON-RPC request sent by the launcher.
    request: Option<String>,

    /// Evaluate a query directly and print the result title.
    #[arg(short, long, conflicts_with = "request")]
    query: Option<String>,

    /// Path to a config file (defaults to the user config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // stdout carries the JSON-RPC response, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = PluginConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let plugin = WhenToExpect::new(config);

    if let Some(query) = cli.query {
        for item in plugin.query(&query) {
            println!("{}", item.title);
        }
        return Ok(());
    }

    let request = cli
        .request
        .unwrap_or_else(|| r#"{"method": "query", "parameters": [""]}"#.to_string());
    let response = plugin
        .handle_request(&request)
        .context("failed to handle launcher request")?;
    println!("{}", response);

    Ok(())
}
