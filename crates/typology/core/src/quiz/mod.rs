//! Quiz scoring engine.
//!
//! Questions award points to typology candidates; [`scoring`] sums them into
//! score maps, a [`strategy`] turns the winners into types, and a
//! [`QuizSession`] sequences answering and scoring.

pub mod bank;
pub mod question;
pub mod results;
pub mod scoring;
pub mod session;
pub mod strategy;

pub use bank::{QuestionOutline, QuizBank, QuizStrategy};
pub use question::{Candidate, Contribution, QuizAnswer, QuizAnswerMap, QuizOption, QuizQuestion};
pub use results::{
    AttitudinalResult, EnneagramResult, InstinctsResult, MbtiEvidence, MbtiResult, QuizResults,
    SocionicsResult,
};
pub use scoring::{
    QuestionInfluence, ScoreBreakdown, ScoreMap, accumulate_score_map, explain, score, top_key,
};
pub use session::{QuizError, QuizSession, QuizState};
pub use strategy::{Deep, Quick, ScoringStrategy, score_quiz};
