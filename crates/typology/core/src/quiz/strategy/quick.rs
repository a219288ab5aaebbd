use super::{ScoringStrategy, best_of, poles_of};
use crate::character::{EnneagramSelection, InstinctSelection};
use crate::quiz::bank::{QuizBank, QuizStrategy};
use crate::quiz::question::QuizAnswerMap;
use crate::quiz::results::{
    EnneagramResult, InstinctsResult, MbtiEvidence, MbtiResult, SocionicsResult,
};
use crate::quiz::scoring::score;
use crate::systems::{MbtiType, SocionicsType};

/// Broad questions: dichotomy poles, core type plus wing, center then realm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quick;

impl ScoringStrategy for Quick {
    const STRATEGY: QuizStrategy = QuizStrategy::Quick;

    fn enneagram(bank: &QuizBank, answers: &QuizAnswerMap) -> EnneagramResult {
        let types = score(&bank.enneagram_types, answers);
        let instincts = score(&bank.enneagram_instincts, answers);

        let core = types.winner;
        let wing = best_of(&types.scores, core.wings());
        EnneagramResult {
            selection: EnneagramSelection::new(core, wing, instincts.winner),
            types,
            instincts,
        }
    }

    fn mbti(bank: &QuizBank, answers: &QuizAnswerMap) -> MbtiResult {
        let poles = score(&bank.mbti_poles, answers);
        let mbti_type = MbtiType::from_poles(poles_of(&poles.scores)).unwrap_or(MbtiType::ISTJ);
        MbtiResult {
            mbti_type,
            evidence: MbtiEvidence::Poles(poles),
        }
    }

    fn socionics(bank: &QuizBank, answers: &QuizAnswerMap) -> SocionicsResult {
        let poles = score(&bank.socionics_poles, answers);
        let socionics_type =
            SocionicsType::from_poles(poles_of(&poles.scores)).unwrap_or(SocionicsType::ILE);
        SocionicsResult {
            socionics_type,
            poles,
            quadras: None,
        }
    }

    /// The center is decided first; the realm only competes within it.
    fn instincts(bank: &QuizBank, answers: &QuizAnswerMap) -> InstinctsResult {
        let centers = score(&bank.instinct_centers, answers);
        let realms = score(&bank.instinct_realms, answers);
        let realm = best_of(&realms.scores, centers.winner.realms());
        InstinctsResult {
            selection: InstinctSelection::new(realm),
            centers: Some(centers),
            realms,
        }
    }
}
