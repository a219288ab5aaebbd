//! Content configuration loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use typology_core::QuizStrategy;

use crate::loaders::{LoadResult, read_file};

/// Settings read from `config.toml` in a data directory.
///
/// Bank entries are file names relative to the data directory. A missing
/// entry selects the built-in bank for that strategy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub default_strategy: QuizStrategy,
    pub quick_bank: Option<String>,
    pub deep_bank: Option<String>,
    /// Name seed applied to selections that carry none.
    pub name_seed: Option<u64>,
}

impl ContentConfig {
    /// Configured bank file for a strategy, if any.
    pub fn bank_file(&self, strategy: QuizStrategy) -> Option<&str> {
        match strategy {
            QuizStrategy::Quick => self.quick_bank.as_deref(),
            QuizStrategy::Deep => self.deep_bank.as_deref(),
        }
    }
}

/// Loader for content configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        let config: ContentConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
