//! CLI entry point for tagsite

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tagsite")]
#[command(version)]
#[command(about = "A static site generator for tagged plain-text content", long_about = None)]
struct Cli {
    /// Set the site root (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Empty the output directory and exit
    #[arg(long, conflicts_with = "refresh")]
    clean: bool,

    /// Empty the output directory, then regenerate everything
    #[arg(long)]
    refresh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tagsite=debug,info"
    } else {
        "tagsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = tagsite::Site::new(&base_dir)?;

    if cli.clean {
        tracing::info!("Cleaning output directory...");
        site.clean()?;
        println!("Cleaned successfully!");
    } else if cli.refresh {
        tracing::info!("Regenerating from scratch...");
        site.refresh()?;
        println!("Generated successfully!");
    } else {
        tracing::info!("Generating static files...");
        site.build()?;
        println!("Generated successfully!");
    }

    Ok(())
}
