//! Persistence for the finished example lists.

use serde::{Deserialize, Serialize};
use shared::core::constants::{DATASET_DATA_FILE, DATASET_INFO_FILE};
use shared::{DatasetError, Example};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a dataset ended up and how many rows it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDataset {
    pub name: String,
    pub path: PathBuf,
    pub num_rows: usize,
}

/// A tabular store that takes a whole list of examples at once.
pub trait ExampleStore {
    fn save(&self, name: &str, examples: &[Example]) -> Result<SavedDataset, DatasetError>;
}

/// Column description written next to the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInfo {
    pub dtype: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub num_rows: usize,
    pub features: BTreeMap<String, FeatureInfo>,
}

impl DatasetInfo {
    fn for_examples(examples: &[Example]) -> Self {
        let mut features = BTreeMap::new();
        features.insert("text".to_string(), FeatureInfo { dtype: "string".to_string() });
        Self { num_rows: examples.len(), features }
    }
}

/// Writes each dataset as `<out_dir>/<name>/data.jsonl` plus a
/// `dataset_info.json` summary. Existing files are replaced.
pub struct JsonlDatasetStore {
    out_dir: PathBuf,
}

impl JsonlDatasetStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    fn write_rows(path: &Path, examples: &[Example]) -> Result<(), DatasetError> {
        let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        for example in examples {
            serde_json::to_writer(&mut writer, example)?;
            writer.write_all(b"\n").map_err(|e| DatasetError::io(path, e))?;
        }
        writer.flush().map_err(|e| DatasetError::io(path, e))
    }
}

impl ExampleStore for JsonlDatasetStore {
    fn save(&self, name: &str, examples: &[Example]) -> Result<SavedDataset, DatasetError> {
        let dir = shared::dataset_dir(&self.out_dir, name);
        fs::create_dir_all(&dir).map_err(|e| DatasetError::io(&dir, e))?;

        Self::write_rows(&dir.join(DATASET_DATA_FILE), examples)?;

        let info_path = dir.join(DATASET_INFO_FILE);
        let info = serde_json::to_string_pretty(&DatasetInfo::for_examples(examples))?;
        fs::write(&info_path, info).map_err(|e| DatasetError::io(&info_path, e))?;

        info!("Wrote {} rows to {}", examples.len(), dir.display());
        Ok(SavedDataset { name: name.to_string(), path: dir, num_rows: examples.len() })
    }
}

/// Reads back the rows of a dataset written by [`JsonlDatasetStore`].
pub fn read_dataset(dir: &Path) -> Result<Vec<Example>, DatasetError> {
    let path = dir.join(DATASET_DATA_FILE);
    let content = fs::read_to_string(&path).map_err(|e| DatasetError::io(&path, e))?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(DatasetError::from))
        .collect()
}
