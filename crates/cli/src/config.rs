//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

use typology_core::QuizStrategy;

/// Settings that apply to every subcommand.
///
/// Command-line flags take precedence over these values.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml`, banks and selections.
    pub data_dir: PathBuf,
    /// Strategy used when neither the flag nor `config.toml` names one.
    pub strategy: Option<QuizStrategy>,
    /// Emit single-line JSON instead of pretty JSON.
    pub compact: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            strategy: None,
            compact: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TYPOLOGY_DATA_DIR` - Content directory (default: `data`)
    /// - `TYPOLOGY_STRATEGY` - `quick` or `deep`
    /// - `TYPOLOGY_COMPACT` - `true` for single-line JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("TYPOLOGY_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(strategy) = read_env::<QuizStrategy>("TYPOLOGY_STRATEGY") {
            config.strategy = Some(strategy);
        }
        if let Some(compact) = read_env::<bool>("TYPOLOGY_COMPACT") {
            config.compact = compact;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
