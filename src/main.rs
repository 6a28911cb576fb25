//! Shelfmark - Personal Library Catalog Manager

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfmark::{config::AppConfig, menu, repository::Repository, services::Services};

/// Personal library catalog manager
#[derive(Parser, Debug)]
#[command(name = "shelfmark")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the catalog store file (overrides configuration)
    #[arg(short, long)]
    store: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load(cli.store)?;

    // Initialize tracing; logs go to stderr so the menu owns stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfmark={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting Shelfmark v{}", env!("CARGO_PKG_VERSION"));

    // Create repository and services; the catalog loads from the store here
    let repository = Repository::new(&config.storage);
    tracing::info!("Using catalog store {}", repository.books.path().display());

    let mut services = Services::new(repository)?;
    tracing::info!("Catalog loaded with {} book(s)", services.catalog.list_all().len());

    menu::run(&mut services)?;

    Ok(())
}
