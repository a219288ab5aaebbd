#![cfg(feature = "loaders")]

use std::path::PathBuf;

use typology_content::ContentFactory;
use typology_core::{
    QuizStrategy, apply_edits, build_typology_summary, generate_character, score_quiz,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_selections_generate() {
    let factory = factory();
    for name in ["scholar", "diplomat"] {
        let input = factory.load_selection(name).unwrap();
        let character = generate_character(&input).unwrap();
        assert_eq!(character.abilities.len(), 4);
        assert!(!build_typology_summary(&character).is_empty());
    }
}

#[test]
fn shipped_edits_apply() {
    let factory = factory();
    let character = generate_character(&factory.load_selection("scholar").unwrap()).unwrap();
    let edited = apply_edits(&character, &factory.load_edits("scholar").unwrap());

    assert_eq!(edited.stats.willpower, 15);
    assert_eq!(edited.archetype.class_name, "Night Scholar");
}

#[test]
fn shipped_answers_score_against_the_default_bank() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    assert_eq!(config.default_strategy, QuizStrategy::Quick);

    let bank = factory.load_bank(config.default_strategy).unwrap();
    let answers = factory.load_answers("sample", &bank).unwrap();
    let results = score_quiz(&bank, &answers);
    assert!(generate_character(&results.to_generator_input()).is_ok());
}
