use super::{ScoringStrategy, best_of, order_fixes, pole_of};
use crate::character::{EnneagramSelection, InstinctSelection};
use crate::quiz::bank::{QuizBank, QuizStrategy};
use crate::quiz::question::QuizAnswerMap;
use crate::quiz::results::{
    EnneagramResult, InstinctsResult, MbtiEvidence, MbtiResult, SocionicsResult,
};
use crate::quiz::scoring::{ScoreMap, score};
use crate::systems::{CognitiveFunction, Dichotomy, MbtiType, Pole, SocionicsType};

/// Narrow questions: functions, quadras and realms, with tritype inference.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deep;

/// Hero counts double; the parent breaks close calls.
fn stack_score(scores: &ScoreMap<CognitiveFunction>, ty: MbtiType) -> i32 {
    let (hero, parent) = ty.hero_parent();
    2 * scores.get(hero) + scores.get(parent)
}

fn best_mbti_type(scores: &ScoreMap<CognitiveFunction>) -> MbtiType {
    let mut best = MbtiType::all()[0];
    let mut best_score = stack_score(scores, best);
    for ty in MbtiType::all().into_iter().skip(1) {
        let score = stack_score(scores, ty);
        if score > best_score {
            best = ty;
            best_score = score;
        }
    }
    best
}

impl ScoringStrategy for Deep {
    const STRATEGY: QuizStrategy = QuizStrategy::Deep;

    /// Adds an instinct stack and a tritype: the best type of each other center,
    /// the higher scoring one as second fix.
    fn enneagram(bank: &QuizBank, answers: &QuizAnswerMap) -> EnneagramResult {
        let types = score(&bank.enneagram_types, answers);
        let instincts = score(&bank.enneagram_instincts, answers);

        let core = types.winner;
        let wing = best_of(&types.scores, core.wings());
        let instinct = instincts.winner;
        let stack = instincts
            .scores
            .ranked()
            .into_iter()
            .find(|candidate| *candidate != instinct);

        let [first_center, second_center] = core.center().others();
        let (second, third) = order_fixes(
            &types.scores,
            best_of(&types.scores, first_center.types()),
            best_of(&types.scores, second_center.types()),
        );

        let mut selection =
            EnneagramSelection::new(core, wing, instinct).with_tritype(second, third);
        selection.instinct_stack = stack;

        EnneagramResult {
            selection,
            types,
            instincts,
        }
    }

    fn mbti(bank: &QuizBank, answers: &QuizAnswerMap) -> MbtiResult {
        let functions = score(&bank.mbti_functions, answers);
        MbtiResult {
            mbti_type: best_mbti_type(&functions.scores),
            evidence: MbtiEvidence::Functions(functions),
        }
    }

    /// Quadra first, then the member with the winning E/I and J/P poles.
    fn socionics(bank: &QuizBank, answers: &QuizAnswerMap) -> SocionicsResult {
        let quadras = score(&bank.socionics_quadras, answers);
        let poles = score(&bank.socionics_poles, answers);

        let extraverted = pole_of(&poles.scores, Dichotomy::EI) == Pole::E;
        let rational = pole_of(&poles.scores, Dichotomy::JP) == Pole::J;
        SocionicsResult {
            socionics_type: SocionicsType::from_quadra(quadras.winner, extraverted, rational),
            poles,
            quadras: Some(quadras),
        }
    }

    fn instincts(bank: &QuizBank, answers: &QuizAnswerMap) -> InstinctsResult {
        let realms = score(&bank.instinct_realms, answers);
        let realm = realms.winner;

        let [first_center, second_center] = realm.center().others();
        let (second, third) = order_fixes(
            &realms.scores,
            best_of(&realms.scores, first_center.realms()),
            best_of(&realms.scores, second_center.realms()),
        );

        InstinctsResult {
            selection: InstinctSelection::new(realm).with_tritype(second, third),
            centers: None,
            realms,
        }
    }
}
