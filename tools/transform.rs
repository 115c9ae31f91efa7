//! Media codec command-line tool
//!
//! Runs a single compress or decompress job on a local file through the
//! same validation, codec registry and naming rules as the HTTP service.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use media_codec::{
    application::transform_service::TransformService,
    dto::TransformUpload,
    infrastructure::{codecs::default_registry, storage::LocalFilesystemStore},
    use_cases::TransformFileUseCase,
    value_objects::{Direction, MediaCategory},
};

#[derive(Parser)]
#[command(name = "media-codec-cli")]
#[command(about = "Compress or decompress a media file with gzip or lzma", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base directory for the uploads/, compressed/ and decompressed/ areas
    #[arg(short, long, global = true, default_value = ".")]
    out_dir: PathBuf,

    /// Skip fsync on writes
    #[arg(long, global = true)]
    no_sync: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress an audio, image or video file
    Compress(JobArgs),
    /// Decompress a .bin file back to a media file
    Decompress(JobArgs),
}

#[derive(clap::Args)]
struct JobArgs {
    /// Media category: audio, image or video
    #[arg(short, long)]
    category: MediaCategory,
    /// Compression algorithm: gzip or lzma
    #[arg(short, long, default_value = "gzip")]
    algorithm: String,
    /// Input file
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (direction, args) = match cli.command {
        Commands::Compress(args) => (Direction::Compress, args),
        Commands::Decompress(args) => (Direction::Decompress, args),
    };

    let filename = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", args.file.display()))?
        .to_string();
    let data = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let store = LocalFilesystemStore::under(&cli.out_dir, !cli.no_sync);
    store.init().await.context("Failed to create output directories")?;

    let use_case = TransformFileUseCase::new(
        TransformService::new(Arc::new(default_registry())),
        Arc::new(store),
    );

    let outcome = use_case
        .execute(TransformUpload {
            filename,
            category: args.category,
            direction,
            algorithm: args.algorithm,
            data: data.into(),
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
