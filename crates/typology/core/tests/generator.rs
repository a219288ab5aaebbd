use typology_core::character::{
    BlendPosition, PassiveSource, neutral_combat_behavior, neutral_element_affinity,
};
use typology_core::{
    AbilitySlot, ApType, CharacterEdits, EnneagramSelection, EnneagramType, GeneratorInput,
    Instinct, InstinctRealm, InstinctSelection, MbtiType, SocionicsType, StatAxis, StatOverrides,
    SystemId, SystemSet, apply_edits, build_archetype, build_typology_summary,
    compute_character_diff, generate_character,
};

fn velf_input() -> GeneratorInput {
    GeneratorInput {
        attitudinal: Some(ApType::VELF),
        enneagram: Some(EnneagramSelection::new(
            EnneagramType::Five,
            EnneagramType::Four,
            Instinct::SelfPreservation,
        )),
        mbti: Some(MbtiType::INTJ),
        socionics: Some(SocionicsType::ILI),
        instincts: Some(InstinctSelection::new(InstinctRealm::Fortitude)),
        ..GeneratorInput::default()
    }
}

#[test]
fn full_input_produces_a_complete_character() {
    let character = generate_character(&velf_input()).unwrap();

    assert_eq!(character.abilities.len(), 4);
    let slots: Vec<AbilitySlot> = character.abilities.iter().map(|a| a.slot).collect();
    assert_eq!(slots, AbilitySlot::all());
    assert!(character.stats.willpower > 0);
    for (_, value) in character.stats.iter() {
        assert!((0..=20).contains(&value));
    }
    assert_eq!(character.active_systems, SystemSet::all());
    assert_eq!(character.active_systems.systems().len(), 5);
    assert_eq!(character.breakdown.recompose(), character.stats);
}

#[test]
fn every_subset_of_systems_generates() {
    let full = velf_input();
    for bits in 0..32u8 {
        let enabled = SystemSet::from_bits_truncate(bits);
        let character = generate_character(&full.restricted_to(enabled)).unwrap();

        assert_eq!(character.active_systems, enabled);
        if enabled.contains_system(SystemId::Socionics) {
            assert_eq!(character.element.socionics, Some(SocionicsType::ILI));
            assert!(character.element.club_passive.is_some());
        } else {
            assert_eq!(character.element, neutral_element_affinity());
            assert!(character.title.starts_with("Unbound"));
        }
        if enabled.contains_system(SystemId::Instincts) {
            assert_eq!(character.combat.realm, Some(InstinctRealm::Fortitude));
            assert!(!character.combat.passives.is_empty());
        } else {
            assert_eq!(character.combat, neutral_combat_behavior());
        }
        assert_eq!(character.abilities.len(), 4);
    }
}

#[test]
fn generation_is_deterministic_and_reproducible_from_source() {
    let first = generate_character(&velf_input()).unwrap();
    let second = generate_character(&velf_input()).unwrap();
    assert_eq!(first, second);

    let regenerated = generate_character(&first.typology_source).unwrap();
    assert_eq!(regenerated, first);
    assert_eq!(
        hex::encode(first.typology_source.fingerprint()),
        hex::encode(velf_input().fingerprint())
    );
}

#[test]
fn empty_edits_are_identity() {
    let character = generate_character(&velf_input()).unwrap();
    assert_eq!(apply_edits(&character, &CharacterEdits::EMPTY), character);
}

#[test]
fn willpower_edit_always_lands() {
    for ap in [ApType::VELF, ApType::FELV, ApType::LEFV] {
        let character = generate_character(&GeneratorInput {
            attitudinal: Some(ap),
            ..velf_input()
        })
        .unwrap();
        let edits = CharacterEdits {
            stats: StatOverrides::EMPTY.with(StatAxis::Willpower, 15),
            ..CharacterEdits::EMPTY
        };
        assert_eq!(apply_edits(&character, &edits).stats.willpower, 15);
    }
}

#[test]
fn tritype_five_one_four_blends_three_steps() {
    let selection = EnneagramSelection::new(
        EnneagramType::Five,
        EnneagramType::Four,
        Instinct::SelfPreservation,
    )
    .with_tritype(EnneagramType::One, EnneagramType::Four);
    let archetype = build_archetype(&selection);

    let steps = archetype.blend_steps.as_ref().unwrap();
    let sources: Vec<EnneagramType> = steps.iter().map(|step| step.source).collect();
    assert_eq!(
        sources,
        [EnneagramType::Five, EnneagramType::One, EnneagramType::Four]
    );
    let positions: Vec<BlendPosition> = steps.iter().map(|step| step.position).collect();
    assert_eq!(positions, BlendPosition::all());

    let passive_types: Vec<EnneagramType> = archetype
        .passives
        .iter()
        .filter_map(|passive| match passive.source {
            PassiveSource::Instinct { ty, .. } => Some(ty),
            _ => None,
        })
        .collect();
    for ty in [EnneagramType::Five, EnneagramType::One, EnneagramType::Four] {
        assert!(passive_types.contains(&ty));
    }
}

#[test]
fn invalid_selections_are_rejected_before_generation() {
    let mut input = velf_input();
    input.enneagram = Some(
        EnneagramSelection::new(
            EnneagramType::Five,
            EnneagramType::Four,
            Instinct::SelfPreservation,
        )
        .with_tritype(EnneagramType::Six, EnneagramType::One),
    );
    assert!(generate_character(&input).is_err());

    input.enneagram = Some(EnneagramSelection::new(
        EnneagramType::Five,
        EnneagramType::Seven,
        Instinct::SelfPreservation,
    ));
    assert!(generate_character(&input).is_err());
}

#[test]
fn diff_invariants_hold() {
    let a = generate_character(&velf_input()).unwrap();
    let self_diff = compute_character_diff(&a, &a);
    assert!(self_diff.is_identical());
    assert_eq!(self_diff.shared_functions.len(), 4);
    assert!(self_diff.same_element && self_diff.same_orientation && self_diff.same_regen);

    let b = generate_character(&GeneratorInput {
        mbti: Some(MbtiType::ESFP),
        socionics: None,
        ..velf_input()
    })
    .unwrap();
    for diff in [compute_character_diff(&a, &b), compute_character_diff(&b, &a)] {
        assert_eq!(
            diff.shared_functions.len() + diff.unique_to_a.len() + diff.unique_to_b.len(),
            diff.ability_comparison.len()
        );
    }
}

#[test]
fn summary_mentions_every_enabled_system() {
    let character = generate_character(&velf_input()).unwrap();
    let summary = build_typology_summary(&character);
    for needle in ["VELF", "5w4 sp", "INTJ", "ILI", "FD"] {
        assert!(summary.contains(needle), "missing {needle} in {summary}");
    }
    assert!(!summary.contains("Not provided"));
}
