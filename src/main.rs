#![allow(non_snake_case)]

mod app;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use medication_core::{default_records_path, load_book, resolve_source, MedicationBook};

/// Book loaded at startup, read by the root component
static BOOK: OnceLock<MedicationBook> = OnceLock::new();

/// Get the book to display (loaded from the command line or the sample)
pub fn get_book() -> MedicationBook {
    BOOK.get().cloned().unwrap_or_else(MedicationBook::sample)
}

/// Medication Record - お薬手帳
#[derive(Parser, Debug)]
#[command(name = "medication-record-desktop")]
#[command(about = "Medication record book - desktop viewer")]
struct Args {
    /// JSON file with medication records (default: config dir, then built-in sample)
    #[arg(short, long)]
    records: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 564.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 876.0)]
    height: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let source = resolve_source(args.records, default_records_path());
    let book = load_book(source.as_ref())
        .with_context(|| format!("Failed to load medication records from {}", source.describe()))?;

    tracing::info!(
        "Starting '{}' with {} records from {}",
        book.profile.title,
        book.records.len(),
        source.describe()
    );

    let title = format!("{} - {}", book.profile.title, book.profile.display_name);

    // Store the book globally
    let _ = BOOK.set(book);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
