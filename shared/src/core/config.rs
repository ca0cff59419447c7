use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::core::constants::{VILLAGER_DATASET, WEREWOLF_DATASET};
use crate::types::ExampleKind;
use crate::DatasetError;

/// Configuration for one dataset build run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory scanned (non-recursively) for game logs
    pub logs_dir: PathBuf,

    /// Directory the two datasets are written under
    pub out_dir: PathBuf,

    pub werewolf_dataset: String,
    pub villager_dataset: String,
}

impl BuildConfig {
    /// Creates a new BuildConfig and ensures that the output directory exists.
    pub fn new(logs_dir: &Path, out_dir: &Path) -> Result<Self> {
        if !logs_dir.is_dir() {
            return Err(DatasetError::InvalidConfig(format!(
                "logs directory {} does not exist or is not a directory",
                logs_dir.display()
            ))
            .into());
        }

        crate::init_output_dir(out_dir)
            .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

        Ok(Self {
            logs_dir: logs_dir.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
            werewolf_dataset: WEREWOLF_DATASET.to_string(),
            villager_dataset: VILLAGER_DATASET.to_string(),
        })
    }

    /// Name of the dataset a category of examples is saved under.
    pub fn dataset_name(&self, kind: ExampleKind) -> &str {
        match kind {
            ExampleKind::Werewolf => &self.werewolf_dataset,
            ExampleKind::Villager => &self.villager_dataset,
        }
    }

    pub fn dataset_path(&self, kind: ExampleKind) -> PathBuf {
        crate::dataset_dir(&self.out_dir, self.dataset_name(kind))
    }
}
