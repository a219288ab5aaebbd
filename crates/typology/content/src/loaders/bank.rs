//! Question bank loader.

use std::path::Path;

use ron::ser::PrettyConfig;
use typology_core::{QuizBank, QuizStrategy};

use crate::loaders::{LoadResult, read_file};

/// Loader for question banks stored as RON.
pub struct QuizBankLoader;

impl QuizBankLoader {
    /// Load a bank from a RON file.
    ///
    /// Rejects banks whose question ids are not unique.
    pub fn load(path: &Path) -> LoadResult<QuizBank> {
        let content = read_file(path)?;
        let bank: QuizBank = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quiz bank RON: {}", e))?;

        if let Some(id) = bank.duplicate_id() {
            anyhow::bail!("Quiz bank {} repeats question id `{}`", path.display(), id);
        }
        tracing::debug!(
            path = %path.display(),
            strategy = %bank.strategy,
            questions = bank.total_questions(),
            "loaded quiz bank"
        );
        Ok(bank)
    }

    /// Load a bank and check that it was written for `strategy`.
    pub fn load_for(path: &Path, strategy: QuizStrategy) -> LoadResult<QuizBank> {
        let bank = Self::load(path)?;
        if bank.strategy != strategy {
            anyhow::bail!(
                "Quiz bank {} is a {} bank, expected {}",
                path.display(),
                bank.strategy,
                strategy
            );
        }
        Ok(bank)
    }

    /// Render a bank as pretty RON.
    pub fn to_ron(bank: &QuizBank) -> LoadResult<String> {
        ron::ser::to_string_pretty(bank, PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize quiz bank: {}", e))
    }

    /// Write a bank to a RON file.
    pub fn save(path: &Path, bank: &QuizBank) -> LoadResult<()> {
        let content = Self::to_ron(bank)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::{deep_bank, quick_bank};

    #[test]
    fn standard_bank_survives_a_file_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.ron");

        QuizBankLoader::save(&path, &deep_bank()).unwrap();
        let loaded = QuizBankLoader::load_for(&path, QuizStrategy::Deep).unwrap();
        assert_eq!(loaded, deep_bank());

        let err = QuizBankLoader::load_for(&path, QuizStrategy::Quick).unwrap_err();
        assert!(err.to_string().contains("expected quick"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quick.ron");

        let mut bank = quick_bank();
        let first = bank.attitudinal[0].clone();
        bank.attitudinal.push(first);
        QuizBankLoader::save(&path, &bank).unwrap();

        let err = QuizBankLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("repeats question id `ap-1`"));
    }
}
