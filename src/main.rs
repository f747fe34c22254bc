//! linkedin2md main entry point
//!
//! Renders one public profile and prints it as markdown on stdout.

use anyhow::Context;
use clap::Parser;
use linkedin2md::output::write_document;
use linkedin2md::{ChromeRenderer, Config, Coordinator};
use tracing_subscriber::EnvFilter;

/// Export public LinkedIn resume to markdown format
#[derive(Parser, Debug)]
#[command(name = "linkedin2md")]
#[command(version)]
#[command(about = "Export public LinkedIn resume to markdown format", long_about = None)]
struct Cli {
    /// The id of the target LinkedIn profile
    #[arg(value_name = "LINKEDIN_ID")]
    linkedin_id: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let config = Config::default();
    let renderer = ChromeRenderer::new(&config);
    let coordinator = Coordinator::new(config, renderer)?;

    let markdown = coordinator
        .convert(&cli.linkedin_id)
        .await
        .with_context(|| format!("Failed to export profile '{}'", cli.linkedin_id))?;

    let stdout = std::io::stdout();
    write_document(&mut stdout.lock(), &markdown).context("Failed to write markdown")?;

    Ok(())
}

/// Logs warnings and errors to stderr; stdout carries only the document
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("linkedin2md=warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
