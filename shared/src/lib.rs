pub mod types;
pub mod core;

use std::path::{Path, PathBuf};

pub use types::{Example, ExampleKind, ExampleSet, Record};

// Helper functions for output layout
pub fn dataset_dir(out_dir: &Path, dataset_name: &str) -> PathBuf {
    out_dir.join(dataset_name)
}

pub fn init_output_dir(out_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(out_dir)
}

// Error handling
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed game log at {location}: {reason}")]
    Structure { location: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DatasetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::Io { path: path.into(), source }
    }

    pub fn structure(location: impl Into<String>, reason: impl Into<String>) -> Self {
        DatasetError::Structure { location: location.into(), reason: reason.into() }
    }

    /// Prefixes a structural error's location with the file it came from.
    /// Other variants already carry enough context and pass through untouched.
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            DatasetError::Structure { location, reason } => DatasetError::Structure {
                location: format!("{}: {}", path.display(), location),
                reason,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_file_prefixes_structure_location() {
        let err = DatasetError::structure("bid[0][1]", "expected a [player, entry] pair")
            .in_file(Path::new("logs/game.json"));
        assert_eq!(
            err.to_string(),
            "Malformed game log at logs/game.json: bid[0][1]: expected a [player, entry] pair"
        );
    }

    #[test]
    fn in_file_leaves_other_errors_alone() {
        let err = DatasetError::InvalidConfig("nope".to_string()).in_file(Path::new("x.json"));
        assert!(matches!(err, DatasetError::InvalidConfig(ref m) if m == "nope"));
    }

    #[test]
    fn dataset_dir_joins_name() {
        assert_eq!(dataset_dir(Path::new("out"), "villager_dataset"), PathBuf::from("out/villager_dataset"));
    }
}
