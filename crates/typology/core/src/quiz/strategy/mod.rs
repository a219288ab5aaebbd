//! Per-system scoring strategies.
//!
//! Both strategies share the accumulation primitive in [`super::scoring`] and
//! differ only in which candidates they score and how a type is inferred from
//! the winners. Every strategy returns a result for every system, even with no
//! answers: all scores are zero and ties resolve by enumeration order.

mod deep;
mod quick;

pub use deep::Deep;
pub use quick::Quick;

use super::bank::{QuizBank, QuizStrategy};
use super::question::{Candidate, QuizAnswerMap};
use super::results::{
    AttitudinalResult, EnneagramResult, InstinctsResult, MbtiResult, QuizResults, SocionicsResult,
};
use super::scoring::{ScoreMap, score};
use crate::systems::{ApType, Aspect, Dichotomy, Pole};

/// One way of turning a bank and its answers into typology results.
pub trait ScoringStrategy {
    const STRATEGY: QuizStrategy;

    fn attitudinal(bank: &QuizBank, answers: &QuizAnswerMap) -> AttitudinalResult {
        let aspects = score(&bank.attitudinal, answers);
        AttitudinalResult {
            ap_type: ap_type_from_scores(&aspects.scores),
            aspects,
        }
    }

    fn enneagram(bank: &QuizBank, answers: &QuizAnswerMap) -> EnneagramResult;

    fn mbti(bank: &QuizBank, answers: &QuizAnswerMap) -> MbtiResult;

    fn socionics(bank: &QuizBank, answers: &QuizAnswerMap) -> SocionicsResult;

    fn instincts(bank: &QuizBank, answers: &QuizAnswerMap) -> InstinctsResult;

    fn results(bank: &QuizBank, answers: &QuizAnswerMap) -> QuizResults {
        let results = QuizResults {
            strategy: Self::STRATEGY,
            attitudinal: Self::attitudinal(bank, answers),
            enneagram: Self::enneagram(bank, answers),
            mbti: Self::mbti(bank, answers),
            socionics: Self::socionics(bank, answers),
            instincts: Self::instincts(bank, answers),
        };
        tracing::debug!(
            strategy = %Self::STRATEGY,
            answered = answers.len(),
            ap = %results.attitudinal.ap_type,
            mbti = %results.mbti.mbti_type,
            socionics = %results.socionics.socionics_type,
            "quiz scored"
        );
        results
    }
}

/// Scores `answers` with the strategy the bank was written for.
pub fn score_quiz(bank: &QuizBank, answers: &QuizAnswerMap) -> QuizResults {
    match bank.strategy {
        QuizStrategy::Quick => Quick::results(bank, answers),
        QuizStrategy::Deep => Deep::results(bank, answers),
    }
}

/// Aspects ordered by score; equal scores keep V, L, E, F order.
fn ap_type_from_scores(scores: &ScoreMap<Aspect>) -> ApType {
    let ranked = scores.ranked();
    <[Aspect; 4]>::try_from(ranked.as_slice())
        .ok()
        .and_then(ApType::from_aspects)
        .unwrap_or(ApType::VLEF)
}

/// Winning pole of one dichotomy; the first pole wins a tie.
fn pole_of(scores: &ScoreMap<Pole>, dichotomy: Dichotomy) -> Pole {
    let poles = dichotomy.poles();
    scores.top_key_among(&poles).unwrap_or(poles[0])
}

/// Winning pole of every dichotomy, in type-letter order.
fn poles_of(scores: &ScoreMap<Pole>) -> [Pole; 4] {
    Dichotomy::all().map(|dichotomy| pole_of(scores, dichotomy))
}

/// Best candidate among `allowed`, falling back to the first one.
fn best_of<K: Candidate, const N: usize>(scores: &ScoreMap<K>, allowed: [K; N]) -> K {
    scores.top_key_among(&allowed).unwrap_or(allowed[0])
}

/// Orders two tritype fixes by score, keeping the given order on a tie.
fn order_fixes<K: Candidate>(scores: &ScoreMap<K>, first: K, second: K) -> (K, K) {
    if scores.get(second) > scores.get(first) {
        (second, first)
    } else {
        (first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::{Contribution, QuizOption, QuizQuestion};

    #[test]
    fn empty_answers_yield_results_for_both_strategies() {
        for strategy in QuizStrategy::all() {
            let bank = QuizBank::new(strategy);
            let results = score_quiz(&bank, &QuizAnswerMap::new());
            assert_eq!(results.strategy, strategy);
            assert_eq!(results.attitudinal.ap_type, ApType::VLEF);
            assert!(results.enneagram.selection.validate().is_ok());
            assert!(results.instincts.selection.validate().is_ok());
            assert!(results.to_generator_input().validate().is_ok());
        }
    }

    #[test]
    fn aspect_ranking_becomes_the_type() {
        let mut bank = QuizBank::new(QuizStrategy::Quick);
        bank.attitudinal.push(QuizQuestion::new(
            "ap",
            "?",
            vec![QuizOption::new(
                "a",
                vec![
                    Contribution::new(Aspect::Physics, 3),
                    Contribution::new(Aspect::Emotion, 2),
                    Contribution::new(Aspect::Logic, 1),
                ],
            )],
        ));
        let answers: QuizAnswerMap = [("ap", 0)].into_iter().collect();
        assert_eq!(score_quiz(&bank, &answers).attitudinal.ap_type, ApType::FELV);
    }

    #[test]
    fn fixes_are_ordered_by_score() {
        let mut scores = ScoreMap::new();
        scores.add(Pole::N, 2);
        assert_eq!(order_fixes(&scores, Pole::S, Pole::N), (Pole::N, Pole::S));
        assert_eq!(order_fixes(&scores, Pole::E, Pole::I), (Pole::E, Pole::I));
        assert_eq!(best_of(&scores, [Pole::S, Pole::N]), Pole::N);
        assert_eq!(poles_of(&scores), [Pole::E, Pole::N, Pole::T, Pole::J]);
    }
}
