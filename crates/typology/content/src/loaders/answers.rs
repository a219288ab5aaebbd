//! Quiz answer loader.
//!
//! ```toml
//! [[answers]]
//! question_id = "ap-1"
//! option_index = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use typology_core::quiz::QuizAnswer;
use typology_core::{QuizAnswerMap, QuizBank};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnswersFile {
    answers: Vec<QuizAnswer>,
}

/// Loader for recorded quiz answers.
pub struct AnswersLoader;

impl AnswersLoader {
    /// Load answers in file order. A repeated question keeps its last option.
    pub fn load(path: &Path) -> LoadResult<QuizAnswerMap> {
        let content = read_file(path)?;
        let file: AnswersFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse answers TOML: {}", e))?;

        Ok(file
            .answers
            .into_iter()
            .map(|answer| (answer.question_id, answer.option_index))
            .collect())
    }

    /// Load answers and reject any the bank cannot score.
    pub fn load_for(path: &Path, bank: &QuizBank) -> LoadResult<QuizAnswerMap> {
        let answers = Self::load(path)?;
        for answer in answers.iter() {
            let Some(option_count) = bank.option_count(&answer.question_id) else {
                anyhow::bail!("Answer for unknown question `{}`", answer.question_id);
            };
            if answer.option_index >= option_count {
                anyhow::bail!(
                    "Answer {} for `{}` is out of range ({} options)",
                    answer.option_index,
                    answer.question_id,
                    option_count
                );
            }
        }
        Ok(answers)
    }
}
