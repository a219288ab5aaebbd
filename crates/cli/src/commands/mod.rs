//! Subcommand implementations.

mod diff;
mod generate;
mod questions;
mod quiz;

pub use diff::Diff;
pub use generate::{Generate, Summary};
pub use questions::Questions;
pub use quiz::Quiz;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use typology_content::{ContentConfig, ContentFactory, EditsLoader, SelectionLoader};
use typology_core::{CharacterEdits, GeneratorInput, QuizStrategy};

use crate::config::CliConfig;

/// Shared state handed to every subcommand.
pub struct Context {
    pub cli: CliConfig,
    pub factory: ContentFactory,
    pub content: ContentConfig,
}

impl Context {
    pub fn new(cli: CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(cli.data_dir.clone());
        let content = factory.load_config()?;
        tracing::debug!(data_dir = %factory.data_dir().display(), "content config loaded");
        Ok(Self {
            cli,
            factory,
            content,
        })
    }

    /// Flag, then environment, then `config.toml`.
    pub fn strategy(&self, flag: Option<QuizStrategy>) -> QuizStrategy {
        flag.or(self.cli.strategy)
            .unwrap_or(self.content.default_strategy)
    }

    /// Load a selection file, applying the configured name seed when it has none.
    pub fn selection(&self, path: &Path) -> Result<GeneratorInput> {
        let mut input = SelectionLoader::load(path)?;
        if input.seed.is_none() {
            input.seed = self.content.name_seed;
        }
        Ok(input)
    }

    pub fn edits(&self, path: Option<&Path>) -> Result<CharacterEdits> {
        match path {
            Some(path) => EditsLoader::load(path),
            None => Ok(CharacterEdits::EMPTY),
        }
    }

    /// Print a value as JSON on stdout.
    pub fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = if self.cli.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        println!("{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &Path) -> Context {
        Context::new(CliConfig {
            data_dir: dir.to_path_buf(),
            ..CliConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn strategy_precedence_is_flag_env_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "default_strategy = \"deep\"\n").unwrap();

        let mut ctx = context_in(dir.path());
        assert_eq!(ctx.strategy(None), QuizStrategy::Deep);

        ctx.cli.strategy = Some(QuizStrategy::Quick);
        assert_eq!(ctx.strategy(None), QuizStrategy::Quick);
        assert_eq!(ctx.strategy(Some(QuizStrategy::Deep)), QuizStrategy::Deep);
    }

    #[test]
    fn configured_seed_fills_selection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "name_seed = 9\n").unwrap();
        let selection = dir.path().join("pick.toml");
        std::fs::write(&selection, "mbti = \"ISTP\"\n").unwrap();

        let ctx = context_in(dir.path());
        assert_eq!(ctx.selection(&selection).unwrap().seed, Some(9));
        assert_eq!(ctx.edits(None).unwrap(), CharacterEdits::EMPTY);
    }
}
