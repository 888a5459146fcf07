use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use igvr::Config;

#[derive(Debug, Parser)]
#[command(name = "igvr")]
#[command(about = "Validate and normalize igv.js browser configurations")]
struct Cli {
    /// Path to a JSON configuration file; reads stdin when omitted
    config: Option<PathBuf>,

    /// Pretty-print the normalized configuration
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let json = match &cli.config {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let config = Config::from_json(&json).context("invalid configuration")?;
    tracing::info!(tracks = config.tracks.len(), "configuration validated");

    let out = if cli.pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    println!("{out}");

    Ok(())
}
