use typology_core::quiz::{
    Contribution, MbtiEvidence, QuizOption, QuizQuestion, QuizStrategy, accumulate_score_map,
    explain, score,
};
use typology_core::systems::{Instinct, Pole};
use typology_core::{
    ApType, Aspect, EnneagramType, MbtiType, QuizAnswerMap, QuizBank, QuizError, QuizSession,
    QuizState, generate_character, score_quiz,
};

fn aspect_questions() -> Vec<QuizQuestion<Aspect>> {
    vec![
        QuizQuestion::new(
            "ap-1",
            "A friend asks for advice. You...",
            vec![
                QuizOption::single("tell them what to do", Aspect::Volition, 2),
                QuizOption::single("lay out the options", Aspect::Logic, 2),
                QuizOption::new(
                    "ask how they feel",
                    vec![
                        Contribution::new(Aspect::Emotion, 2),
                        Contribution::new(Aspect::Physics, 1),
                    ],
                ),
            ],
        ),
        QuizQuestion::new(
            "ap-2",
            "After a long week you want...",
            vec![
                QuizOption::single("a hot bath", Aspect::Physics, 2),
                QuizOption::single("to win something", Aspect::Volition, 1),
            ],
        ),
        QuizQuestion::new(
            "ap-3",
            "An argument is settled by...",
            vec![
                QuizOption::single("evidence", Aspect::Logic, 1),
                QuizOption::single("whoever cares more", Aspect::Emotion, 1),
            ],
        ),
    ]
}

fn quick_bank() -> QuizBank {
    let mut bank = QuizBank::new(QuizStrategy::Quick);
    bank.attitudinal = aspect_questions();
    bank.enneagram_types.push(QuizQuestion::new(
        "enn-1",
        "What do you protect most?",
        vec![
            QuizOption::single("my independence", EnneagramType::Eight, 2),
            QuizOption::single("my knowledge", EnneagramType::Five, 2),
        ],
    ));
    bank.enneagram_instincts.push(QuizQuestion::new(
        "inst-1",
        "Where does your attention go first?",
        vec![
            QuizOption::single("my supplies", Instinct::SelfPreservation, 1),
            QuizOption::single("the room", Instinct::Social, 1),
            QuizOption::single("one person", Instinct::Sexual, 1),
        ],
    ));
    bank.mbti_poles.push(QuizQuestion::new(
        "mbti-ei",
        "Recharge by...",
        vec![
            QuizOption::single("going out", Pole::E, 1),
            QuizOption::single("staying in", Pole::I, 1),
        ],
    ));
    bank.mbti_poles.push(QuizQuestion::new(
        "mbti-sn",
        "Trust...",
        vec![
            QuizOption::single("what is", Pole::S, 1),
            QuizOption::single("what could be", Pole::N, 1),
        ],
    ));
    bank
}

#[test]
fn scoring_is_deterministic() {
    let answers = QuizAnswerMap::new().with("ap-1", 2).with("ap-2", 0);
    let first = score(&aspect_questions(), &answers);
    let second = score(&aspect_questions(), &answers);
    assert_eq!(first, second);
    assert_eq!(first.winner, Aspect::Physics);
}

#[test]
fn answer_order_changes_the_trail_only() {
    let forward = QuizAnswerMap::new()
        .with("ap-1", 1)
        .with("ap-2", 0)
        .with("ap-3", 1);
    let backward = QuizAnswerMap::new()
        .with("ap-3", 1)
        .with("ap-2", 0)
        .with("ap-1", 1);

    assert_eq!(
        accumulate_score_map(&aspect_questions(), &forward),
        accumulate_score_map(&aspect_questions(), &backward)
    );

    let ids = |answers: &QuizAnswerMap| -> Vec<String> {
        explain(&aspect_questions(), answers)
            .into_iter()
            .map(|influence| influence.question_id)
            .collect()
    };
    assert_eq!(ids(&forward), ["ap-1", "ap-2", "ap-3"]);
    assert_eq!(ids(&backward), ["ap-3", "ap-2", "ap-1"]);
}

#[test]
fn ties_resolve_by_enumeration_order() {
    // Logic and Physics both reach 2; Logic comes first.
    let answers = QuizAnswerMap::new().with("ap-1", 1).with("ap-2", 0);
    let breakdown = score(&aspect_questions(), &answers);
    assert_eq!(breakdown.scores.get(Aspect::Logic), 2);
    assert_eq!(breakdown.scores.get(Aspect::Physics), 2);
    assert_eq!(breakdown.winner, Aspect::Logic);
}

#[test]
fn empty_answers_still_produce_results() {
    for strategy in QuizStrategy::all() {
        let results = score_quiz(&QuizBank::new(strategy), &QuizAnswerMap::new());
        let character = generate_character(&results.to_generator_input()).unwrap();
        assert_eq!(character.abilities.len(), 4);
    }
}

#[test]
fn session_walks_to_results() {
    let bank = quick_bank();
    let total = bank.total_questions();
    let mut session = QuizSession::new(bank).unwrap();

    let ids: Vec<String> = session.bank().question_ids().map(str::to_owned).collect();
    for (index, id) in ids.iter().enumerate() {
        assert_eq!(session.state(), QuizState::InProgress);
        let option = if id == "ap-1" { 2 } else { 1 };
        let state = session.answer(id, option).unwrap();
        if index + 1 == total {
            assert_eq!(state, QuizState::Complete);
        }
    }

    let results = session.compute_results().unwrap().clone();
    assert_eq!(session.state(), QuizState::ResultsComputed);
    assert_eq!(session.answer("ap-1", 0), Err(QuizError::AlreadyComputed));

    // Emotion 3, then Volition and Physics tied at 1, Logic last.
    assert_eq!(results.attitudinal.ap_type, ApType::EVFL);
    assert_eq!(results.enneagram.selection.core, EnneagramType::Five);
    assert_eq!(results.enneagram.selection.instinct, Instinct::Social);
    assert_eq!(results.mbti.mbti_type, MbtiType::INTJ);
    assert!(matches!(results.mbti.evidence, MbtiEvidence::Poles(_)));

    let character = generate_character(&results.to_generator_input()).unwrap();
    assert_eq!(character.archetype.enneagram_type, Some(EnneagramType::Five));
}
