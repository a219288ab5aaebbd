//! Question banks.

use super::question::QuizQuestion;
use crate::systems::{
    Aspect, CognitiveFunction, EnneagramType, Instinct, InstinctCenter, InstinctRealm, Pole,
    Quadra,
};

/// Which scoring strategy a bank is written for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuizStrategy {
    /// Fewer, broader questions scored on dichotomies and centers.
    #[default]
    Quick,
    /// More, narrower questions scored on functions, quadras and realms.
    Deep,
}

impl QuizStrategy {
    pub const COUNT: usize = 2;

    pub const fn all() -> [QuizStrategy; Self::COUNT] {
        [QuizStrategy::Quick, QuizStrategy::Deep]
    }
}

/// All questions of one quiz, grouped by what they score.
///
/// A strategy reads only the sections it needs; the others may stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuizBank {
    pub strategy: QuizStrategy,
    pub attitudinal: Vec<QuizQuestion<Aspect>>,
    pub enneagram_types: Vec<QuizQuestion<EnneagramType>>,
    pub enneagram_instincts: Vec<QuizQuestion<Instinct>>,
    /// Quick MBTI: one pole per dichotomy.
    pub mbti_poles: Vec<QuizQuestion<Pole>>,
    /// Deep MBTI: cognitive functions.
    pub mbti_functions: Vec<QuizQuestion<CognitiveFunction>>,
    /// Socionics dichotomies. The deep strategy only reads E/I and J/P from here.
    pub socionics_poles: Vec<QuizQuestion<Pole>>,
    pub socionics_quadras: Vec<QuizQuestion<Quadra>>,
    pub instinct_centers: Vec<QuizQuestion<InstinctCenter>>,
    pub instinct_realms: Vec<QuizQuestion<InstinctRealm>>,
}

/// A type-erased view of one question, for listing and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOutline<'a> {
    /// Bank section the question belongs to.
    pub section: &'static str,
    pub id: &'a str,
    pub prompt: &'a str,
    pub options: Vec<&'a str>,
}

fn section<'a, K>(
    name: &'static str,
    questions: &'a [QuizQuestion<K>],
) -> impl Iterator<Item = QuestionOutline<'a>> + 'a {
    questions.iter().map(move |question| QuestionOutline {
        section: name,
        id: &question.id,
        prompt: &question.prompt,
        options: question
            .options
            .iter()
            .map(|option| option.label.as_str())
            .collect(),
    })
}

impl QuizBank {
    pub fn new(strategy: QuizStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Every question across all sections, in bank order.
    pub fn outline(&self) -> impl Iterator<Item = QuestionOutline<'_>> + '_ {
        section("attitudinal", &self.attitudinal)
            .chain(section("enneagram_types", &self.enneagram_types))
            .chain(section("enneagram_instincts", &self.enneagram_instincts))
            .chain(section("mbti_poles", &self.mbti_poles))
            .chain(section("mbti_functions", &self.mbti_functions))
            .chain(section("socionics_poles", &self.socionics_poles))
            .chain(section("socionics_quadras", &self.socionics_quadras))
            .chain(section("instinct_centers", &self.instinct_centers))
            .chain(section("instinct_realms", &self.instinct_realms))
    }

    /// Question ids across all sections, in bank order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.outline().map(|question| question.id)
    }

    pub fn total_questions(&self) -> usize {
        self.outline().count()
    }

    /// Number of options of a question, or `None` if the bank has no such question.
    pub fn option_count(&self, question_id: &str) -> Option<usize> {
        self.outline()
            .find(|question| question.id == question_id)
            .map(|question| question.options.len())
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.option_count(question_id).is_some()
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<&str> {
        let ids: Vec<&str> = self.question_ids().collect();
        for (index, id) in ids.iter().enumerate() {
            if ids[..index].contains(id) {
                return Some(*id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::QuizOption;

    #[test]
    fn lookups_span_all_sections() {
        let mut bank = QuizBank::new(QuizStrategy::Deep);
        bank.attitudinal.push(QuizQuestion::new(
            "ap-1",
            "?",
            vec![QuizOption::single("a", Aspect::Logic, 1)],
        ));
        bank.instinct_realms.push(QuizQuestion::new(
            "realm-1",
            "?",
            vec![
                QuizOption::single("a", InstinctRealm::Union, 1),
                QuizOption::single("b", InstinctRealm::Security, 1),
            ],
        ));

        assert_eq!(bank.total_questions(), 2);
        assert_eq!(bank.option_count("realm-1"), Some(2));
        assert_eq!(bank.option_count("nope"), None);
        assert_eq!(bank.question_ids().collect::<Vec<_>>(), ["ap-1", "realm-1"]);
        assert_eq!(bank.duplicate_id(), None);

        let realm = bank.outline().nth(1).unwrap();
        assert_eq!(realm.section, "instinct_realms");
        assert_eq!(realm.options, ["a", "b"]);

        bank.instinct_centers.push(QuizQuestion::new("ap-1", "?", vec![]));
        assert_eq!(bank.duplicate_id(), Some("ap-1"));
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Deep".parse::<QuizStrategy>().ok(), Some(QuizStrategy::Deep));
        assert_eq!(QuizStrategy::Quick.to_string(), "quick");
    }
}
