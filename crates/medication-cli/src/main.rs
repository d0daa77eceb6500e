//! Medication Record CLI
//!
//! Thin wrapper around medication-core and medication-ui for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # List the records that would be shown
//! medication-record list
//!
//! # Export the screen as a standalone HTML page
//! medication-record render --output record.html
//!
//! # Print only the screen fragment to stdout
//! medication-record render --fragment
//!
//! # Use a custom record file
//! medication-record --records ./records.json list
//!
//! # Show summary counters and the asset catalogue
//! medication-record info
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use medication_core::{default_records_path, load_book, resolve_source, MedicationBook};
use medication_ui::{render_app, render_document, Asset, Tab};

/// Medication Record - お薬手帳
#[derive(Parser)]
#[command(name = "medication-record")]
#[command(version = "0.1.0")]
#[command(about = "Medication record book - list records and export the screen")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file with medication records (default: config dir, then built-in sample)
    #[arg(short, long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show summary counters, tabs and image assets
    Info,

    /// List medication records with their dosing times
    List,

    /// Render the screen as static HTML
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the screen markup, without the HTML document wrapper
        #[arg(long)]
        fragment: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn print_info(book: &MedicationBook) {
    println!("{} - {}", book.profile.title, book.profile.display_name);
    println!();
    println!("Summary:");
    for (value, label) in book.summary.cells() {
        println!("  {}: {}", label, value);
    }
    println!();
    println!("Tabs:");
    for tab in Tab::ALL {
        let marker = if tab.is_active() { "active" } else { "inactive" };
        println!("  {} ({})", tab.label(), marker);
    }
    println!();
    println!("Assets:");
    for asset in Asset::ALL {
        println!("  {:?}: {}", asset, asset.url());
    }
}

fn print_list(book: &MedicationBook) {
    if book.records.is_empty() {
        println!("No medication records");
        return;
    }

    for (index, record) in book.records.iter().enumerate() {
        println!("{}. {}", index + 1, record.name);
        println!("   {}", record.description);
        println!("   {} / {} / 処方日 {}", record.frequency, record.hospital, record.prescription_date);
        println!("   Times: {}", record.times.join(", "));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let source = resolve_source(cli.records, default_records_path());
    let book = load_book(source.as_ref())
        .with_context(|| format!("Failed to load medication records from {}", source.describe()))?;

    match cli.command {
        Commands::Info => print_info(&book),

        Commands::List => print_list(&book),

        Commands::Render { output, fragment } => {
            let html = if fragment {
                render_app(&book)
            } else {
                render_document(&book)
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Wrote medication record page");
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", html),
            }
        }
    }

    Ok(())
}
