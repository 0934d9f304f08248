use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlas_reasoning::{write_analysis, ReasoningClient, ReasoningConfig};

const SAMPLE_PARAGRAPH: &str = "Public access to surveillance data is often justified as a deterrent, \
yet empirical evidence suggests such systems may displace rather than \
prevent harm, while simultaneously introducing new risks to privacy and misuse.";

/// Summarize a paragraph and extract its claims and assumptions.
#[derive(Debug, Parser)]
#[command(name = "atlas-reason", version, about)]
struct Cli {
    /// Paragraph to analyze.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Read the paragraph from a file.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the JSON result.
    #[arg(short, long, default_value = "reasoning_output.json")]
    output: PathBuf,

    /// Base URL of the chat-completion API.
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long)]
    model: Option<String>,

    #[arg(long)]
    max_tokens: Option<u32>,

    #[arg(long)]
    temperature: Option<f32>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paragraph = match (&cli.text, &cli.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => SAMPLE_PARAGRAPH.to_string(),
    };

    let mut config = ReasoningConfig::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.max_tokens = max_tokens;
    }
    if let Some(temperature) = cli.temperature {
        config.temperature = temperature;
    }
    config.timeout = cli.timeout_secs.map(Duration::from_secs);

    let client = ReasoningClient::new(config)?;
    let analysis = client
        .analyze(paragraph.trim())
        .await
        .context("paragraph analysis failed")?;

    write_analysis(&cli.output, &analysis)?;
    println!("Analysis saved to {}", cli.output.display());
    Ok(())
}
