//! Loaders for reading typology data from files.
//!
//! Question banks are RON; selections, edits, answers and configuration are
//! TOML. Every loader deserializes typology-core types directly through serde.

pub mod answers;
pub mod bank;
pub mod config;
pub mod factory;
pub mod selection;

pub use answers::AnswersLoader;
pub use bank::QuizBankLoader;
pub use config::{ConfigLoader, ContentConfig};
pub use factory::ContentFactory;
pub use selection::{EditsLoader, SelectionLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
