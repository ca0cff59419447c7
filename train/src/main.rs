use anyhow::{Context, Result};
use clap::Parser;
use logs_to_chatml::{build_datasets, JsonlDatasetStore};
use shared::core::config::BuildConfig;
use shared::ExampleKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build Werewolf & Villager finetuning datasets from game logs
#[derive(Parser, Debug)]
#[command(name = "logs_to_chatml", version)]
struct Args {
    /// Folder containing one or more game-log JSON files
    #[arg(long = "logs_dir", visible_alias = "logs-dir", value_name = "DIR")]
    logs_dir: PathBuf,

    /// Where to write `werewolf_dataset/` and `villager_dataset/`
    #[arg(long = "out_dir", visible_alias = "out-dir", value_name = "DIR")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries the summary
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = BuildConfig::new(&args.logs_dir, &args.out_dir)?;
    let store = JsonlDatasetStore::new(&config.out_dir);

    let saved = build_datasets(&config, &store)
        .with_context(|| format!("Failed to build datasets from {}", config.logs_dir.display()))?;

    for (kind, dataset) in ExampleKind::ALL.iter().zip(&saved) {
        println!(
            "Saved {} {} examples to `{}/`",
            dataset.num_rows,
            kind.label(),
            dataset.path.display()
        );
    }

    Ok(())
}
