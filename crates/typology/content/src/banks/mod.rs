//! Built-in question banks.
//!
//! Each bank is plain data built once on request. Question ids are prefixed
//! by system (`ap`, `enn`, `inst`, `mbti`, `soc`, `xi`) and unique across a bank.

mod deep;
mod quick;

pub use deep::deep_bank;
pub use quick::quick_bank;

use typology_core::quiz::{Contribution, QuizOption, QuizQuestion};
use typology_core::{QuizBank, QuizStrategy};

/// The built-in bank for a strategy.
pub fn standard_bank(strategy: QuizStrategy) -> QuizBank {
    match strategy {
        QuizStrategy::Quick => quick_bank(),
        QuizStrategy::Deep => deep_bank(),
    }
}

pub(crate) fn question<K, const N: usize>(
    id: &str,
    prompt: &str,
    options: [QuizOption<K>; N],
) -> QuizQuestion<K> {
    QuizQuestion::new(id, prompt, options.into())
}

/// Option crediting one candidate.
pub(crate) fn pick<K>(label: &str, candidate: K, points: i32) -> QuizOption<K> {
    QuizOption::single(label, candidate, points)
}

/// Option splitting credit over several candidates.
pub(crate) fn split<K, const N: usize>(label: &str, credits: [(K, i32); N]) -> QuizOption<K> {
    QuizOption::new(
        label,
        credits
            .into_iter()
            .map(|(candidate, points)| Contribution::new(candidate, points))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_banks_are_well_formed() {
        for strategy in QuizStrategy::all() {
            let bank = standard_bank(strategy);
            assert_eq!(bank.strategy, strategy);
            assert_eq!(bank.duplicate_id(), None);
            assert!(bank.total_questions() > 0);
            for id in bank.question_ids() {
                assert!(bank.option_count(id).unwrap_or(0) >= 2, "{id} needs options");
            }
        }
        assert!(deep_bank().total_questions() > quick_bank().total_questions());
    }
}
