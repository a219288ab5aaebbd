//! Quiz questions and answer maps.

use core::fmt::Debug;

use crate::systems::{
    Aspect, CognitiveFunction, EnneagramType, Instinct, InstinctCenter, InstinctRealm, Pole,
    Quadra,
};

/// A closed set of values a quiz can score.
///
/// `candidates()` fixes the enumeration order, which is also the tie-break
/// order: among equal scores the earliest candidate wins.
pub trait Candidate: Copy + Eq + Ord + Debug + 'static {
    fn candidates() -> &'static [Self];
}

macro_rules! impl_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate for $ty {
                fn candidates() -> &'static [Self] {
                    static ALL: [$ty; <$ty>::COUNT] = <$ty>::all();
                    &ALL
                }
            }
        )*
    };
}

impl_candidate!(
    Aspect,
    EnneagramType,
    Instinct,
    Pole,
    CognitiveFunction,
    Quadra,
    InstinctCenter,
    InstinctRealm,
);

/// Points an option awards to one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution<K> {
    pub candidate: K,
    pub points: i32,
}

impl<K> Contribution<K> {
    pub const fn new(candidate: K, points: i32) -> Self {
        Self { candidate, points }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizOption<K> {
    pub label: String,
    /// A single option may credit several candidates at once.
    pub contributions: Vec<Contribution<K>>,
}

impl<K> QuizOption<K> {
    pub fn new(label: impl Into<String>, contributions: Vec<Contribution<K>>) -> Self {
        Self {
            label: label.into(),
            contributions,
        }
    }

    /// Option crediting a single candidate.
    pub fn single(label: impl Into<String>, candidate: K, points: i32) -> Self {
        Self::new(label, vec![Contribution::new(candidate, points)])
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizQuestion<K> {
    /// Stable id, unique across a whole bank.
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption<K>>,
}

impl<K> QuizQuestion<K> {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<QuizOption<K>>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    pub fn option(&self, index: usize) -> Option<&QuizOption<K>> {
        self.options.get(index)
    }
}

/// One recorded answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizAnswer {
    pub question_id: String,
    pub option_index: usize,
}

/// Selected option per question id, in the order questions were first answered.
///
/// Answering a question again replaces the selection but keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuizAnswerMap {
    answers: Vec<QuizAnswer>,
}

impl QuizAnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&mut self, question_id: impl Into<String>, option_index: usize) {
        let question_id = question_id.into();
        match self
            .answers
            .iter_mut()
            .find(|answer| answer.question_id == question_id)
        {
            Some(existing) => existing.option_index = option_index,
            None => self.answers.push(QuizAnswer {
                question_id,
                option_index,
            }),
        }
    }

    #[must_use]
    pub fn with(mut self, question_id: impl Into<String>, option_index: usize) -> Self {
        self.answer(question_id, option_index);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
            .map(|answer| answer.option_index)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizAnswer> + '_ {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for QuizAnswerMap {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (question_id, option_index) in iter {
            map.answer(question_id, option_index);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_enumeration_order() {
        assert_eq!(Aspect::candidates(), &Aspect::all());
        assert_eq!(InstinctRealm::candidates().len(), 9);
        assert_eq!(Pole::candidates()[0], Pole::E);
    }

    #[test]
    fn reanswering_keeps_first_position() {
        let mut answers = QuizAnswerMap::new();
        answers.answer("q1", 0);
        answers.answer("q2", 1);
        answers.answer("q1", 2);

        let order: Vec<(&str, usize)> = answers
            .iter()
            .map(|a| (a.question_id.as_str(), a.option_index))
            .collect();
        assert_eq!(order, [("q1", 2), ("q2", 1)]);
        assert_eq!(answers.len(), 2);
    }
}
