//! Score accumulation shared by every quiz strategy.
//!
//! Scores are a pure running sum of contributions, so the final map does not
//! depend on answer order. Winners are the strictly highest score; ties go to
//! the candidate that comes first in enumeration order.

use super::question::{Candidate, Contribution, QuizAnswerMap, QuizQuestion};

/// Accumulated points for every candidate of one kind, in enumeration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreMap<K> {
    entries: Vec<(K, i32)>,
}

impl<K: Candidate> Default for ScoreMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Candidate> ScoreMap<K> {
    /// Every candidate at zero.
    pub fn new() -> Self {
        Self {
            entries: K::candidates().iter().map(|k| (*k, 0)).collect(),
        }
    }

    pub fn get(&self, candidate: K) -> i32 {
        self.entries
            .iter()
            .find(|(k, _)| *k == candidate)
            .map_or(0, |(_, score)| *score)
    }

    pub fn add(&mut self, candidate: K, points: i32) {
        if let Some((_, score)) = self.entries.iter_mut().find(|(k, _)| *k == candidate) {
            *score = score.saturating_add(points);
        }
    }

    pub fn add_contributions<'a>(&mut self, contributions: impl IntoIterator<Item = &'a Contribution<K>>) {
        for contribution in contributions {
            self.add(contribution.candidate, contribution.points);
        }
    }

    /// Sum of two maps. Merging is associative and commutative.
    #[must_use]
    pub fn merged(&self, other: &ScoreMap<K>) -> Self {
        let mut merged = self.clone();
        for (candidate, points) in other.iter() {
            merged.add(candidate, points);
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, i32)> + '_ {
        self.entries.iter().copied()
    }

    /// Candidate with the strictly highest score; the earliest one wins ties.
    pub fn top_key(&self) -> K {
        self.top_key_among(K::candidates())
            .unwrap_or(K::candidates()[0])
    }

    /// Like [`top_key`](Self::top_key) but restricted to `allowed`.
    ///
    /// Ties still resolve by enumeration order, not by the order of `allowed`.
    pub fn top_key_among(&self, allowed: &[K]) -> Option<K> {
        let mut best: Option<(K, i32)> = None;
        for (candidate, score) in self.iter() {
            if !allowed.contains(&candidate) {
                continue;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Candidates from highest to lowest score; equal scores keep enumeration order.
    pub fn ranked(&self) -> Vec<K> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(candidate, _)| candidate).collect()
    }
}

/// Sums the contributions of every answered question in `questions`.
///
/// Answers to questions outside `questions`, and option indices out of range,
/// contribute nothing.
pub fn accumulate_score_map<K: Candidate>(
    questions: &[QuizQuestion<K>],
    answers: &QuizAnswerMap,
) -> ScoreMap<K> {
    let mut scores = ScoreMap::new();
    for influence in explain(questions, answers) {
        scores.add_contributions(&influence.contributions);
    }
    scores
}

/// Winner of a score map.
pub fn top_key<K: Candidate>(scores: &ScoreMap<K>) -> K {
    scores.top_key()
}

/// What one answered question contributed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionInfluence<K> {
    pub question_id: String,
    pub option_index: usize,
    pub option_label: String,
    pub contributions: Vec<Contribution<K>>,
}

/// Contribution trail in the order the questions were answered.
pub fn explain<K: Candidate>(
    questions: &[QuizQuestion<K>],
    answers: &QuizAnswerMap,
) -> Vec<QuestionInfluence<K>> {
    answers
        .iter()
        .filter_map(|answer| {
            let question = questions.iter().find(|q| q.id == answer.question_id)?;
            let option = question.option(answer.option_index)?;
            Some(QuestionInfluence {
                question_id: question.id.clone(),
                option_index: answer.option_index,
                option_label: option.label.clone(),
                contributions: option.contributions.clone(),
            })
        })
        .collect()
}

/// Scores, winner and explanation trail of one candidate kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown<K> {
    pub scores: ScoreMap<K>,
    pub winner: K,
    pub influences: Vec<QuestionInfluence<K>>,
}

pub fn score<K: Candidate>(questions: &[QuizQuestion<K>], answers: &QuizAnswerMap) -> ScoreBreakdown<K> {
    let influences = explain(questions, answers);
    let mut scores = ScoreMap::new();
    for influence in &influences {
        scores.add_contributions(&influence.contributions);
    }
    ScoreBreakdown {
        winner: scores.top_key(),
        scores,
        influences,
    }
}
