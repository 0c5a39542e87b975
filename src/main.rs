use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use kinklint::{detector, loader, report};

#[derive(Parser, Debug)]
#[command(name = "kinklint")]
#[command(about = "Reports duplicate idea titles in the kink catalog")]
#[command(version)]
struct Args {
    /// Path to the kinks catalog file
    #[arg(default_value = "kinks.yaml")]
    catalog: PathBuf,
}

fn main() -> Result<()> {
    // WHY: logs go to stderr so stdout carries nothing but the report lines
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting kinklint");
    info!(?args, "Parsed CLI arguments");

    // WHY: File::open would accept a directory on some platforms and fail
    // later with a confusing parse error, so reject it up front
    if args.catalog.is_dir() {
        anyhow::bail!("Catalog path is a directory, not a file: {}", args.catalog.display());
    }

    let records = loader::load_catalog(&args.catalog)?;
    let duplicates = detector::find_duplicates(&records);

    info!(
        "Scanned {} records, found {} duplicate titles",
        records.len(),
        duplicates.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &duplicates)?;
    out.flush()?;

    Ok(())
}
