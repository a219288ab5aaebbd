//! Comparison engine.
//!
//! A [`CharacterDiff`] is always recomputed from two characters and never
//! stored. Abilities are matched by cognitive function regardless of slot, so
//! two types sharing a function in different roles still count it as shared.

use super::Character;
use super::abilities::{Ability, AbilitySlot};
use crate::stats::StatAxis;
use crate::systems::CognitiveFunction;

/// Signed per-axis difference `b - a`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub willpower: i32,
    pub intelligence: i32,
    pub spirit: i32,
    pub vitality: i32,
}

impl StatDelta {
    pub const fn get(&self, axis: StatAxis) -> i32 {
        match axis {
            StatAxis::Willpower => self.willpower,
            StatAxis::Intelligence => self.intelligence,
            StatAxis::Spirit => self.spirit,
            StatAxis::Vitality => self.vitality,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.willpower == 0 && self.intelligence == 0 && self.spirit == 0 && self.vitality == 0
    }
}

/// Key abilities are grouped by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbilityKey {
    Function(CognitiveFunction),
    /// Neutral-kit abilities have no function and are matched by slot.
    Unattuned(AbilitySlot),
}

impl AbilityKey {
    pub fn of(ability: &Ability) -> Self {
        match ability.function {
            Some(function) => AbilityKey::Function(function),
            None => AbilityKey::Unattuned(ability.slot),
        }
    }
}

/// Where one key appears in each character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityComparison {
    pub key: AbilityKey,
    /// Slot and name in character A.
    pub a: Option<(AbilitySlot, String)>,
    /// Slot and name in character B.
    pub b: Option<(AbilitySlot, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDiff {
    pub stat_delta: StatDelta,

    /// Every key present in either kit: A's slot order, then B's remaining keys.
    pub ability_comparison: Vec<AbilityComparison>,
    pub shared_functions: Vec<AbilityKey>,
    pub unique_to_a: Vec<AbilityKey>,
    pub unique_to_b: Vec<AbilityKey>,

    pub same_element: bool,
    pub same_archetype: bool,
    pub same_orientation: bool,
    pub same_quadra: bool,
    pub same_activation: bool,
    pub same_positioning: bool,
    pub same_regen: bool,

    pub shared_passives: Vec<String>,
    pub passives_unique_to_a: Vec<String>,
    pub passives_unique_to_b: Vec<String>,
}

impl CharacterDiff {
    /// True when no field differs.
    pub fn is_identical(&self) -> bool {
        self.stat_delta.is_zero()
            && self.unique_to_a.is_empty()
            && self.unique_to_b.is_empty()
            && self.same_element
            && self.same_archetype
            && self.same_orientation
            && self.same_quadra
            && self.same_activation
            && self.same_positioning
            && self.same_regen
            && self.passives_unique_to_a.is_empty()
            && self.passives_unique_to_b.is_empty()
    }
}

fn find(kit: &[Ability], key: AbilityKey) -> Option<(AbilitySlot, String)> {
    kit.iter()
        .find(|ability| AbilityKey::of(ability) == key)
        .map(|ability| (ability.slot, ability.name.clone()))
}

fn compare_abilities(a: &Character, b: &Character) -> Vec<AbilityComparison> {
    let mut keys: Vec<AbilityKey> = a.abilities.iter().map(AbilityKey::of).collect();
    for key in b.abilities.iter().map(AbilityKey::of) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys.into_iter()
        .map(|key| AbilityComparison {
            key,
            a: find(&a.abilities, key),
            b: find(&b.abilities, key),
        })
        .collect()
}

fn passive_names(character: &Character) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for passive in character.passives() {
        if !names.contains(&passive.name) {
            names.push(passive.name.clone());
        }
    }
    names
}

/// Compares two characters field by field.
pub fn compute_character_diff(a: &Character, b: &Character) -> CharacterDiff {
    let stat_delta = StatDelta {
        willpower: b.stats.willpower - a.stats.willpower,
        intelligence: b.stats.intelligence - a.stats.intelligence,
        spirit: b.stats.spirit - a.stats.spirit,
        vitality: b.stats.vitality - a.stats.vitality,
    };

    let ability_comparison = compare_abilities(a, b);
    let mut shared_functions = Vec::new();
    let mut unique_to_a = Vec::new();
    let mut unique_to_b = Vec::new();
    for comparison in &ability_comparison {
        match (&comparison.a, &comparison.b) {
            (Some(_), Some(_)) => shared_functions.push(comparison.key),
            (Some(_), None) => unique_to_a.push(comparison.key),
            (None, _) => unique_to_b.push(comparison.key),
        }
    }

    let names_a = passive_names(a);
    let names_b = passive_names(b);
    let shared_passives: Vec<String> = names_a
        .iter()
        .filter(|name| names_b.contains(name))
        .cloned()
        .collect();
    let passives_unique_to_a = names_a
        .iter()
        .filter(|name| !names_b.contains(name))
        .cloned()
        .collect();
    let passives_unique_to_b = names_b
        .iter()
        .filter(|name| !names_a.contains(name))
        .cloned()
        .collect();

    CharacterDiff {
        stat_delta,
        ability_comparison,
        shared_functions,
        unique_to_a,
        unique_to_b,
        same_element: a.element.element == b.element.element,
        same_archetype: a.archetype.class_name == b.archetype.class_name,
        same_orientation: a.combat.orientation == b.combat.orientation,
        same_quadra: a.element.quadra == b.element.quadra,
        same_activation: a.combat.activation == b.combat.activation,
        same_positioning: a.combat.positioning == b.combat.positioning,
        same_regen: a.combat.regen == b.combat.regen,
        shared_passives,
        passives_unique_to_a,
        passives_unique_to_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::archetype::EnneagramSelection;
    use crate::character::generator::{GeneratorInput, generate_character};
    use crate::systems::{EnneagramType, Instinct, MbtiType, SocionicsType};

    fn generate(mbti: Option<MbtiType>, socionics: Option<SocionicsType>) -> Character {
        generate_character(&GeneratorInput {
            enneagram: Some(EnneagramSelection::new(
                EnneagramType::Eight,
                EnneagramType::Seven,
                Instinct::Sexual,
            )),
            mbti,
            socionics,
            ..GeneratorInput::default()
        })
        .unwrap()
    }

    #[test]
    fn self_diff_is_identical() {
        let character = generate(Some(MbtiType::ENTJ), Some(SocionicsType::LIE));
        let diff = compute_character_diff(&character, &character);

        assert!(diff.is_identical());
        assert_eq!(diff.shared_functions.len(), 4);
        assert!(diff.unique_to_a.is_empty() && diff.unique_to_b.is_empty());
    }

    #[test]
    fn functions_match_across_slots() {
        // INTJ: Ni Te Fi Se / ENTJ: Te Ni Se Fi - same functions, different slots.
        let a = generate(Some(MbtiType::INTJ), None);
        let b = generate(Some(MbtiType::ENTJ), None);
        let diff = compute_character_diff(&a, &b);
        assert_eq!(diff.shared_functions.len(), 4);

        // INTP: Ti Ne Si Fe shares nothing with INTJ.
        let c = generate(Some(MbtiType::INTP), None);
        let diff = compute_character_diff(&a, &c);
        assert!(diff.shared_functions.is_empty());
        assert_eq!(
            diff.shared_functions.len() + diff.unique_to_a.len() + diff.unique_to_b.len(),
            diff.ability_comparison.len()
        );
        assert_eq!(diff.ability_comparison.len(), 8);
    }

    #[test]
    fn element_and_passive_differences_are_reported() {
        let a = generate(None, Some(SocionicsType::ILE));
        let b = generate(None, Some(SocionicsType::SLI));
        let diff = compute_character_diff(&a, &b);

        assert!(!diff.same_element);
        assert!(!diff.same_quadra);
        assert!(diff.same_archetype);
        assert_eq!(diff.passives_unique_to_a, ["Researcher's Insight"]);
        assert_eq!(diff.passives_unique_to_b, ["Field Expertise"]);
        assert_eq!(diff.shared_passives, ["Possessive Claim"]);
        assert!(diff.stat_delta.is_zero());
    }

    #[test]
    fn neutral_affinity_compares_against_attuned_ones() {
        let neutral = generate(Some(MbtiType::ENTJ), None);
        let also_neutral = generate(Some(MbtiType::INTJ), None);
        let diff = compute_character_diff(&neutral, &also_neutral);
        assert!(diff.same_element && diff.same_quadra);
        assert!(diff.same_orientation && diff.same_regen);

        let attuned = generate(Some(MbtiType::ENTJ), Some(SocionicsType::ILE));
        let diff = compute_character_diff(&neutral, &attuned);
        assert!(!diff.same_element);
        assert!(!diff.same_quadra);
        assert!(diff.passives_unique_to_a.is_empty());
        assert_eq!(diff.passives_unique_to_b, ["Researcher's Insight"]);
        assert!(!diff.is_identical());
    }
}
