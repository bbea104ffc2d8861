use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use cuillere_indexer::{pipeline, IndexerConfig, MeiliSink, TesseractEngine};

/// La Cuillère d'Argent MeiliSearch indexer
#[derive(Parser)]
#[command(name = "cuillere-indexer", about = "La Cuillère d'Argent MeiliSearch indexer")]
struct Cli {
    /// Url of the MeiliSearch API
    #[arg(long)]
    url: Option<String>,

    /// Uid of the index
    #[arg(long)]
    index_uid: Option<String>,

    /// Name of the index
    #[arg(long)]
    index_name: Option<String>,

    /// Directory containing the scanned page images
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Display some debug information
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    if let Err(e) = execute(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = IndexerConfig::load()?;
    if let Some(url) = cli.url {
        config.meilisearch_url = url;
    }
    if let Some(uid) = cli.index_uid {
        config.index_uid = uid;
    }
    if let Some(name) = cli.index_name {
        config.index_name = name;
    }
    if let Some(dir) = cli.images_dir {
        config.images_dir = dir;
    }

    let engine = TesseractEngine::new(
        config.ocr.lang.clone(),
        config.ocr.category_psm,
        config.ocr.content_psm,
    );
    let sink = MeiliSink::connect(&config.meilisearch_url, &config.index_uid).await?;

    println!(
        "Indexing into \"{}\" ({})...",
        config.index_name, config.index_uid
    );
    let summary = pipeline::run(&config, &engine, &sink).await?;
    println!(
        "Indexation finished! {} recipes from {} pages. Enjoy to cook a lot of good recipes :)",
        summary.records, summary.pages
    );

    Ok(())
}
