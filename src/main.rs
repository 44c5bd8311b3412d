//! fieldcheck demo - builds the built-in records and prints their fields.

use anyhow::{Context, Result};
use clap::Parser;
use fieldcheck::{ApiConfig, User};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version)]
#[command(about = "Validate and print the built-in example records")]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let config = ApiConfig::new("sk-abc123").context("Failed to build APIConfig")?;
    println!("{}", config.model());
    println!("{}", config.max_tokens());
    println!("{}", config.api_key());

    let user = User::new("Alice", 30, "alice@example.com").context("Failed to build User")?;
    println!("{}", user.name());
    println!("{}", user.age());
    println!("{}", user.email());

    // Rejected input: age out of range and malformed email
    if let Err(err) = User::new("Alice", 150, "not-an-email") {
        println!("Validation error: {err}");
    }

    Ok(())
}
