//! Quiz session state machine.
//!
//! ```text
//! InProgress ──last answer──► Complete ──compute_results──► ResultsComputed
//! ```
//!
//! Answers may be changed freely until results are computed. There is no way
//! back from `ResultsComputed`; a restart is a new session.

use super::bank::QuizBank;
use super::question::QuizAnswerMap;
use super::results::QuizResults;
use super::strategy::score_quiz;
use crate::error::{ErrorSeverity, TypologyError};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum QuizState {
    InProgress,
    Complete,
    ResultsComputed,
}

/// Misuse of a [`QuizSession`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuizError {
    #[error("unknown question `{0}`")]
    UnknownQuestion(String),

    #[error("question id `{0}` appears more than once in the bank")]
    DuplicateQuestion(String),

    #[error("question `{question_id}` has {option_count} options, got index {option_index}")]
    OptionOutOfRange {
        question_id: String,
        option_index: usize,
        option_count: usize,
    },

    #[error("results were already computed")]
    AlreadyComputed,

    #[error("quiz incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

impl TypologyError for QuizError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            QuizError::UnknownQuestion(_)
            | QuizError::DuplicateQuestion(_)
            | QuizError::OptionOutOfRange { .. } => ErrorSeverity::Validation,
            QuizError::AlreadyComputed | QuizError::Incomplete { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            QuizError::UnknownQuestion(_) => "QUIZ_UNKNOWN_QUESTION",
            QuizError::DuplicateQuestion(_) => "QUIZ_DUPLICATE_QUESTION",
            QuizError::OptionOutOfRange { .. } => "QUIZ_OPTION_OUT_OF_RANGE",
            QuizError::AlreadyComputed => "QUIZ_ALREADY_COMPUTED",
            QuizError::Incomplete { .. } => "QUIZ_INCOMPLETE",
        }
    }
}

/// One run through a question bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    bank: QuizBank,
    answers: QuizAnswerMap,
    state: QuizState,
    results: Option<QuizResults>,
}

impl QuizSession {
    /// Starts a session. A bank without questions is complete immediately.
    ///
    /// Answers are keyed by question id, so a bank that reuses an id could
    /// never be completed and is rejected.
    pub fn new(bank: QuizBank) -> Result<Self, QuizError> {
        if let Some(id) = bank.duplicate_id() {
            return Err(QuizError::DuplicateQuestion(id.to_owned()));
        }
        let state = if bank.total_questions() == 0 {
            QuizState::Complete
        } else {
            QuizState::InProgress
        };
        Ok(Self {
            bank,
            answers: QuizAnswerMap::new(),
            state,
            results: None,
        })
    }

    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn answers(&self) -> &QuizAnswerMap {
        &self.answers
    }

    /// `(answered, total)` question counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.bank.total_questions())
    }

    /// Records or replaces the answer to one question and returns the new state.
    pub fn answer(&mut self, question_id: &str, option_index: usize) -> Result<QuizState, QuizError> {
        if self.state == QuizState::ResultsComputed {
            return Err(QuizError::AlreadyComputed);
        }

        let option_count = self
            .bank
            .option_count(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_owned()))?;
        if option_index >= option_count {
            return Err(QuizError::OptionOutOfRange {
                question_id: question_id.to_owned(),
                option_index,
                option_count,
            });
        }

        self.answers.answer(question_id, option_index);
        let (answered, total) = self.progress();
        if answered >= total {
            self.state = QuizState::Complete;
        }
        tracing::trace!(question_id, option_index, answered, total, "quiz answer recorded");
        Ok(self.state)
    }

    /// Scores the answers and moves to the terminal state.
    ///
    /// Calling it again returns the same results.
    pub fn compute_results(&mut self) -> Result<&QuizResults, QuizError> {
        if self.state == QuizState::InProgress {
            let (answered, total) = self.progress();
            return Err(QuizError::Incomplete { answered, total });
        }

        let results = match self.results.take() {
            Some(results) => results,
            None => score_quiz(&self.bank, &self.answers),
        };
        self.state = QuizState::ResultsComputed;
        Ok(self.results.insert(results))
    }

    /// Computed results, if any.
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank::QuizStrategy;
    use crate::quiz::question::{QuizOption, QuizQuestion};
    use crate::systems::{Aspect, Pole};

    fn bank() -> QuizBank {
        let mut bank = QuizBank::new(QuizStrategy::Quick);
        bank.attitudinal.push(QuizQuestion::new(
            "ap",
            "?",
            vec![
                QuizOption::single("a", Aspect::Emotion, 1),
                QuizOption::single("b", Aspect::Physics, 1),
            ],
        ));
        bank.mbti_poles.push(QuizQuestion::new(
            "ei",
            "?",
            vec![
                QuizOption::single("a", Pole::E, 1),
                QuizOption::single("b", Pole::I, 1),
            ],
        ));
        bank
    }

    #[test]
    fn transitions_in_order() {
        let mut session = QuizSession::new(bank()).unwrap();
        assert_eq!(session.state(), QuizState::InProgress);
        assert_eq!(session.answer("ap", 0), Ok(QuizState::InProgress));
        assert_eq!(
            session.compute_results().err(),
            Some(QuizError::Incomplete {
                answered: 1,
                total: 2
            })
        );

        assert_eq!(session.answer("ei", 1), Ok(QuizState::Complete));
        // Changing an answer keeps the session complete.
        assert_eq!(session.answer("ap", 1), Ok(QuizState::Complete));

        let first = session.compute_results().cloned();
        assert!(first.is_ok());
        assert_eq!(session.state(), QuizState::ResultsComputed);
        assert_eq!(session.compute_results().cloned(), first);
        assert_eq!(session.answer("ap", 0), Err(QuizError::AlreadyComputed));
    }

    #[test]
    fn bad_answers_leave_the_session_untouched() {
        let mut session = QuizSession::new(bank()).unwrap();
        let err = session.answer("ap", 2).unwrap_err();
        assert_eq!(err.error_code(), "QUIZ_OPTION_OUT_OF_RANGE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            session.answer("missing", 0),
            Err(QuizError::UnknownQuestion("missing".to_owned()))
        );
        assert!(session.answers().is_empty());
        assert_eq!(session.progress(), (0, 2));
    }

    #[test]
    fn empty_bank_is_complete_at_once() {
        let mut session = QuizSession::new(QuizBank::new(QuizStrategy::Deep)).unwrap();
        assert_eq!(session.state(), QuizState::Complete);
        let results = session.compute_results().cloned();
        assert_eq!(results.map(|r| r.strategy), Ok(QuizStrategy::Deep));
    }

    #[test]
    fn shared_question_ids_are_rejected() {
        let mut bank = QuizBank::new(QuizStrategy::Quick);
        for _ in 0..2 {
            bank.attitudinal.push(QuizQuestion::new(
                "dup",
                "?",
                vec![
                    QuizOption::single("a", Aspect::Emotion, 1),
                    QuizOption::single("b", Aspect::Logic, 1),
                ],
            ));
        }

        let err = QuizSession::new(bank).unwrap_err();
        assert_eq!(err, QuizError::DuplicateQuestion("dup".to_owned()));
        assert_eq!(err.error_code(), "QUIZ_DUPLICATE_QUESTION");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
