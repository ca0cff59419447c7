//! Builds werewolf and villager finetuning datasets from game logs.
//!
//! - `loader`: reads JSON array, single-object and JSONL log files
//! - `extractor`: picks eliminate turns and villager bids out of each game
//! - `formatter`: renders a prompt/response pair as one conversation
//! - `driver`: walks the logs directory and runs the pipeline
//! - `store`: writes the finished datasets to disk

pub mod driver;
pub mod extractor;
pub mod formatter;
pub mod loader;
pub mod store;

pub use driver::{build_datasets, process_logs};
pub use formatter::format_conversation;
pub use loader::load_games;
pub use store::{ExampleStore, JsonlDatasetStore, SavedDataset};
