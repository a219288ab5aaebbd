//! Score recorded quiz answers.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use typology_content::{AnswersLoader, QuizBankLoader};
use typology_core::{
    Character, QuizBank, QuizResults, QuizSession, QuizState, QuizStrategy, generate_character,
    score_quiz,
};

use super::Context;

/// Parses `--strategy` through [`QuizStrategy`]'s own names.
pub(super) fn parse_strategy(value: &str) -> Result<QuizStrategy, String> {
    value.parse().map_err(|_| {
        let names: Vec<String> = QuizStrategy::all().iter().map(ToString::to_string).collect();
        format!("unknown strategy `{value}`, expected one of: {}", names.join(", "))
    })
}

/// Load the bank from `path`, or the configured bank for `strategy`.
pub(super) fn resolve_bank(
    ctx: &Context,
    path: Option<&std::path::Path>,
    strategy: QuizStrategy,
) -> Result<QuizBank> {
    match path {
        Some(path) => QuizBankLoader::load_for(path, strategy),
        None => ctx.factory.load_bank(strategy),
    }
}

/// Score a file of quiz answers
#[derive(Parser)]
pub struct Quiz {
    /// Answers file (TOML)
    #[arg(value_name = "ANSWERS")]
    answers: PathBuf,

    /// Scoring strategy
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Option<QuizStrategy>,

    /// Custom question bank (RON) instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Score even when some questions are unanswered
    #[arg(long)]
    partial: bool,

    /// Also generate the character for the inferred selection
    #[arg(short, long)]
    generate: bool,
}

#[derive(Serialize)]
struct QuizOutput {
    answered: usize,
    total: usize,
    results: QuizResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<Character>,
}

impl Quiz {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let strategy = ctx.strategy(self.strategy);
        let bank = resolve_bank(ctx, self.bank.as_deref(), strategy)?;
        let answers = AnswersLoader::load_for(&self.answers, &bank)?;

        let mut session = QuizSession::new(bank)?;
        for answer in answers.iter() {
            session.answer(&answer.question_id, answer.option_index)?;
        }
        let (answered, total) = session.progress();

        let results = if self.partial && session.state() == QuizState::InProgress {
            tracing::warn!(answered, total, "scoring an incomplete quiz");
            score_quiz(session.bank(), session.answers())
        } else {
            session.compute_results()?.clone()
        };

        let (fingerprint, character) = if self.generate {
            let input = results.to_generator_input();
            let character = generate_character(&input)?;
            (Some(hex::encode(input.fingerprint())), Some(character))
        } else {
            (None, None)
        };

        ctx.emit(&QuizOutput {
            answered,
            total,
            results,
            fingerprint,
            character,
        })
    }
}
