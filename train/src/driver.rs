//! Batch driver: walks a logs directory and builds both datasets.

use shared::core::config::BuildConfig;
use shared::core::constants::LOG_FILE_SUFFIX;
use shared::{DatasetError, ExampleKind, ExampleSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::extractor::extract_games;
use crate::loader::load_games;
use crate::store::{ExampleStore, SavedDataset};

/// Lists the game log files directly inside `logs_dir`, in directory order.
///
/// A file qualifies when its lowercased name ends with `.json`; the content
/// may still be JSONL.
pub fn log_files(logs_dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(logs_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(logs_dir).to_path_buf();
            DatasetError::io(path, e.into())
        })?;
        let path = entry.path();

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !name.ends_with(LOG_FILE_SUFFIX) {
            debug!("Skipping {}: not a {} file", path.display(), LOG_FILE_SUFFIX);
            continue;
        }
        if !path.is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Loads and extracts every log file in `logs_dir`, concatenating the
/// examples in file order. The first fatal error aborts the whole run.
pub fn process_logs(logs_dir: &Path) -> Result<ExampleSet, DatasetError> {
    let mut examples = ExampleSet::new();

    for path in log_files(logs_dir)? {
        let games = load_games(&path)?;
        let found = extract_games(&games).map_err(|e| e.in_file(&path))?;
        info!(
            "{}: {} game(s), {} werewolf / {} villager example(s)",
            path.display(),
            games.len(),
            found.werewolf.len(),
            found.villager.len()
        );
        examples.append(found);
    }

    Ok(examples)
}

/// Runs the whole build: extract from `config.logs_dir`, then hand both
/// example lists to `store`. Nothing is saved unless every file succeeded.
pub fn build_datasets(config: &BuildConfig, store: &dyn ExampleStore) -> Result<Vec<SavedDataset>, DatasetError> {
    let examples = process_logs(&config.logs_dir)?;

    ExampleKind::ALL
        .iter()
        .map(|&kind| store.save(config.dataset_name(kind), examples.get(kind)))
        .collect()
}
