use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlas_web::{AtlasConfig, WebServer};

/// Serve the Atlas world map, timeline, and event pages.
#[derive(Debug, Parser)]
#[command(name = "atlas-web", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5000.
    #[arg(long)]
    bind: Option<String>,

    /// Directory holding countries.json, timeline.json, and events/.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory holding the page templates (index.html, world_map.html, ...).
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Directory served under /static.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AtlasConfig::discover(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if let Some(dir) = cli.data_dir {
        config.paths.data_dir = dir;
    }
    if let Some(dir) = cli.templates_dir {
        config.paths.templates_dir = dir;
    }
    if let Some(dir) = cli.static_dir {
        config.paths.static_dir = dir;
    }

    let server = WebServer::new(&config).context("failed to load startup data")?;
    server.run().await
}
