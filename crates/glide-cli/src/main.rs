use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "A smooth-scrolling terminal pager")]
struct Cli {
    /// Text file to view
    file: PathBuf,

    /// Override the click-scroll animation duration in milliseconds
    #[arg(long = "duration")]
    click_duration_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let mut config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    if let Some(duration) = cli.click_duration_ms {
        config.scroll.click_duration_ms = duration;
    }

    commands::view::run(config, cli.file).await
}
