//! Preview an uploaded CSV file as an aligned text table.
//!
//! ```text
//! cargo run --example preview -- reviews.csv
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sentiment_pipeline::table_preview::TablePreview;

#[derive(Parser)]
#[command(about = "Preview a CSV file as a table")]
struct Args {
    /// CSV file to preview.
    path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let table = TablePreview::from_path(&args.path)?;
    println!(
        "Uploaded data ({} rows x {} columns):",
        table.n_rows(),
        table.n_cols()
    );
    println!("{}", table.render());
    Ok(())
}
