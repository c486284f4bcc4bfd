//! Interactive sentiment classification over exported artifacts.
//!
//! Reads one input per line from stdin and prints the predicted label with
//! its confidence percentage:
//!
//! ```text
//! cargo run --example classify -- --artifacts artifacts/
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sentiment_pipeline::sentiment::{ResourceSource, SentimentPipelineBuilder, TfidfLinearOptions};

#[derive(Parser)]
#[command(about = "Classify text as negative, neutral, or positive")]
struct Args {
    /// Directory containing tfidf_vectorizer.json and classifier.safetensors.
    #[arg(long, default_value = "artifacts")]
    artifacts: PathBuf,

    /// Directory overriding the builtin stopword/lemma resources.
    #[arg(long)]
    resources: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let mut options = TfidfLinearOptions::from_dir(&args.artifacts);
    if let Some(dir) = args.resources {
        options.resources = ResourceSource::Dir(dir);
    }

    let pipeline = SentimentPipelineBuilder::tfidf_linear(options).build()?;

    println!("Enter text to classify (empty line to quit):");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }
        let result = pipeline.predict(input)?;
        println!(
            "sentiment: {} (confidence: {:.2}%)",
            result.sentiment, result.confidence
        );
    }
    Ok(())
}
