// crates/ipsgen-cli/src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ipsgen_core::{Converter, FailurePolicy, SchemaVariant};

/// A CLI for converting shipment manifest CSV files to IPS XML.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Converts every manifest in a directory into per-record IPS XML files.
    Convert {
        /// Directory scanned for *.csv manifest files.
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Directory the XML documents are written to.
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Manifest schema the input files use.
        #[arg(short, long, value_enum)]
        schema: SchemaArg,

        /// Keep converting a file past bad records instead of aborting it.
        #[arg(long)]
        continue_on_error: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SchemaArg {
    Direct,
    Reseller,
}

impl From<SchemaArg> for SchemaVariant {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Direct => SchemaVariant::Direct,
            SchemaArg::Reseller => SchemaVariant::Reseller,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input_dir,
            output_dir,
            schema,
            continue_on_error,
        } => {
            let policy = if continue_on_error {
                FailurePolicy::Collect
            } else {
                FailurePolicy::Abort
            };
            let converter = Converter::new(schema.into()).with_policy(policy);
            convert_directory(&input_dir, &output_dir, converter).await?;
        }
    }

    Ok(())
}

struct FileSummary {
    written: usize,
    skipped: usize,
}

async fn convert_directory(
    input_dir: &std::path::Path,
    output_dir: &std::path::Path,
    converter: Converter,
) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let pattern = input_dir.join("*.csv");
    let pattern_str = pattern
        .to_str()
        .context("input directory is not valid UTF-8")?;

    println!(
        "Converting {} manifests from: {}",
        converter.variant(),
        input_dir.display()
    );

    let mut handles = Vec::new();
    for entry in glob::glob(pattern_str)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "could not read path from glob pattern");
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }

        let out_dir = output_dir.to_path_buf();
        handles.push(tokio::task::spawn_blocking(move || {
            let result = convert_file(&path, &out_dir, converter);
            (path, result)
        }));
    }

    let mut documents_written = 0;
    let mut records_skipped = 0;
    let mut files_failed = 0;

    for joined in futures::future::join_all(handles).await {
        let (path, result) = joined.context("conversion task panicked")?;
        match result {
            Ok(summary) => {
                documents_written += summary.written;
                records_skipped += summary.skipped;
            }
            Err(e) => {
                eprintln!("  -> WARNING: {} failed. Reason: {}", path.display(), e);
                files_failed += 1;
            }
        }
    }

    println!("\n--- Conversion Summary ---");
    println!("  ✅ XML documents written: {}", documents_written);
    println!("  ⚠️  Files failed: {}", files_failed);
    if records_skipped > 0 {
        println!("  ⚠️  Records skipped: {}", records_skipped);
    }

    Ok(())
}

fn convert_file(
    path: &std::path::Path,
    output_dir: &std::path::Path,
    converter: Converter,
) -> Result<FileSummary> {
    let raw =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("manifest.csv");

    let outcome = converter.process(filename, &raw)?;

    for artifact in &outcome.artifacts {
        let target = output_dir.join(&artifact.name);
        std::fs::write(&target, &artifact.bytes)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }

    tracing::info!(
        file = %path.display(),
        written = outcome.artifacts.len(),
        skipped = outcome.failures.len(),
        "manifest processed"
    );
    Ok(FileSummary {
        written: outcome.artifacts.len(),
        skipped: outcome.failures.len(),
    })
}
