//! Content factory for loading typology data from a directory.

use std::path::{Path, PathBuf};

use typology_core::{CharacterEdits, GeneratorInput, QuizAnswerMap, QuizBank, QuizStrategy};

use crate::banks::standard_bank;
use crate::loaders::{
    AnswersLoader, ConfigLoader, ContentConfig, EditsLoader, LoadResult, QuizBankLoader,
    SelectionLoader,
};

/// Content factory that loads typology content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── banks/
/// │   ├── quick.ron
/// │   └── deep.ron
/// └── selections/
///     └── scholar.toml
/// ```
///
/// Every file is optional: without `config.toml` the defaults apply, and
/// without a bank file the built-in bank is used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `config.toml`, or the default config when it is absent.
    pub fn load_config(&self) -> LoadResult<ContentConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(ContentConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the bank for `strategy`.
    ///
    /// Looks for the file named in the config first, then `banks/{strategy}.ron`,
    /// then falls back to the built-in bank.
    pub fn load_bank(&self, strategy: QuizStrategy) -> LoadResult<QuizBank> {
        let config = self.load_config()?;
        let path = match config.bank_file(strategy) {
            Some(file) => self.data_dir.join(file),
            None => self.data_dir.join("banks").join(format!("{}.ron", strategy)),
        };

        if path.exists() {
            QuizBankLoader::load_for(&path, strategy)
        } else if config.bank_file(strategy).is_some() {
            anyhow::bail!("Configured bank {} does not exist", path.display())
        } else {
            tracing::debug!(%strategy, "using built-in quiz bank");
            Ok(standard_bank(strategy))
        }
    }

    /// Load a selection from `selections/{name}.toml`, applying the configured
    /// name seed when the selection has none.
    pub fn load_selection(&self, name: &str) -> LoadResult<GeneratorInput> {
        let path = self.data_dir.join("selections").join(format!("{}.toml", name));
        let mut input = SelectionLoader::load(&path)?;
        if input.seed.is_none() {
            input.seed = self.load_config()?.name_seed;
        }
        Ok(input)
    }

    /// Load edits from `edits/{name}.toml`.
    pub fn load_edits(&self, name: &str) -> LoadResult<CharacterEdits> {
        let path = self.data_dir.join("edits").join(format!("{}.toml", name));
        EditsLoader::load(&path)
    }

    /// Load answers from `answers/{name}.toml`, checked against the bank.
    pub fn load_answers(&self, name: &str, bank: &QuizBank) -> LoadResult<QuizAnswerMap> {
        let path = self.data_dir.join("answers").join(format!("{}.toml", name));
        AnswersLoader::load_for(&path, bank)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::{deep_bank, quick_bank};

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn empty_directory_uses_built_in_content() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), ContentConfig::default());
        assert_eq!(factory.load_bank(QuizStrategy::Quick).unwrap(), quick_bank());
        assert_eq!(factory.load_bank(QuizStrategy::Deep).unwrap(), deep_bank());
    }

    #[test]
    fn bank_file_overrides_built_in() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("banks")).unwrap();

        let mut custom = quick_bank();
        custom.attitudinal.truncate(1);
        QuizBankLoader::save(&dir.path().join("banks").join("quick.ron"), &custom).unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_bank(QuizStrategy::Quick).unwrap(), custom);
    }

    #[test]
    fn missing_configured_bank_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "deep_bank = \"nowhere.ron\"\n").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_bank(QuizStrategy::Deep).is_err());
    }

    #[test]
    fn configured_seed_fills_unseeded_selections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "name_seed = 42\n").unwrap();
        std::fs::create_dir(dir.path().join("selections")).unwrap();
        std::fs::write(
            dir.path().join("selections").join("plain.toml"),
            "mbti = \"ENFP\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("selections").join("seeded.toml"),
            "mbti = \"ENFP\"\nseed = 3\n",
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_selection("plain").unwrap().seed, Some(42));
        assert_eq!(factory.load_selection("seeded").unwrap().seed, Some(3));
    }
}
