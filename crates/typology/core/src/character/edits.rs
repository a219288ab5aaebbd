//! Edit layer.
//!
//! Applies a sparse [`CharacterEdits`] overlay to a generated character and
//! returns the edited view. Dependent values are recomputed: stat edits flow
//! through the breakdown as overrides, and an edited element brings its own
//! quadra, club and club passive.

use super::Character;
use super::abilities::AbilitySlot;
use super::element::ElementAffinity;
use super::naming::generate_title;
use crate::stats::{StatBlock, StatOverrides};
use crate::systems::Element;

/// Optional replacement name per ability slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityNameEdits {
    pub hero: Option<String>,
    pub parent: Option<String>,
    pub child: Option<String>,
    pub inferior: Option<String>,
}

impl AbilityNameEdits {
    pub const EMPTY: Self = Self {
        hero: None,
        parent: None,
        child: None,
        inferior: None,
    };

    pub fn get(&self, slot: AbilitySlot) -> Option<&str> {
        match slot {
            AbilitySlot::Hero => self.hero.as_deref(),
            AbilitySlot::Parent => self.parent.as_deref(),
            AbilitySlot::Child => self.child.as_deref(),
            AbilitySlot::Inferior => self.inferior.as_deref(),
        }
    }

    #[must_use]
    pub fn with(mut self, slot: AbilitySlot, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match slot {
            AbilitySlot::Hero => self.hero = name,
            AbilitySlot::Parent => self.parent = name,
            AbilitySlot::Child => self.child = name,
            AbilitySlot::Inferior => self.inferior = name,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        AbilitySlot::all().iter().all(|slot| self.get(*slot).is_none())
    }
}

/// Sparse overlay of manual corrections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterEdits {
    pub stats: StatOverrides,
    pub class_name: Option<String>,
    pub ability_names: AbilityNameEdits,
    pub element: Option<Element>,
    pub combat_orientation: Option<String>,
}

impl CharacterEdits {
    /// Overlay that changes nothing.
    pub const EMPTY: Self = Self {
        stats: StatOverrides::EMPTY,
        class_name: None,
        ability_names: AbilityNameEdits::EMPTY,
        element: None,
        combat_orientation: None,
    };

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
            && self.class_name.is_none()
            && self.ability_names.is_empty()
            && self.element.is_none()
            && self.combat_orientation.is_none()
    }
}

/// Returns the edited view of `character`. The original is left untouched.
pub fn apply_edits(character: &Character, edits: &CharacterEdits) -> Character {
    let mut edited = character.clone();

    if !edits.stats.is_empty() {
        edited.breakdown = character.breakdown.with_overrides(&edits.stats);
        edited.stats = edited.breakdown.recompose();
    }

    if let Some(class_name) = &edits.class_name {
        edited.archetype.class_name = class_name.clone();
    }

    for slot in AbilitySlot::all() {
        if let Some(name) = edits.ability_names.get(slot) {
            edited.abilities[slot.as_index()].name = name.to_owned();
        }
    }

    if let Some(element) = edits.element {
        if edited.element.element != Some(element) {
            edited.element = ElementAffinity::from_element(element);
        }
    }

    if let Some(orientation) = &edits.combat_orientation {
        edited.combat.orientation = orientation.clone();
    }

    if edits.class_name.is_some() || edits.element.is_some() {
        edited.title = generate_title(edited.element.element, &edited.archetype.class_name);
    }

    edited
}

/// Returns true if `edited_stats` spends no more points than `character` was generated with.
///
/// This is advisory; [`apply_edits`] never enforces it.
pub fn is_stat_budget_valid(character: &Character, edited_stats: &StatBlock) -> bool {
    edited_stats.total() <= character.stats.total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::archetype::PassiveSource;
    use crate::character::combat::InstinctSelection;
    use crate::character::generator::{GeneratorInput, generate_character};
    use crate::stats::StatAxis;
    use crate::systems::{ApType, Club, InstinctRealm, MbtiType, Quadra, SocionicsType};

    fn character() -> Character {
        generate_character(&GeneratorInput {
            attitudinal: Some(ApType::LVEF),
            socionics: Some(SocionicsType::ILE),
            instincts: Some(InstinctSelection::new(InstinctRealm::Union)),
            ..GeneratorInput::default()
        })
        .unwrap()
    }

    #[test]
    fn empty_edits_reproduce_the_character() {
        let original = character();
        assert_eq!(apply_edits(&original, &CharacterEdits::EMPTY), original);
        assert!(CharacterEdits::default().is_empty());
    }

    #[test]
    fn stat_edits_flow_through_the_breakdown() {
        let original = character();
        let edits = CharacterEdits {
            stats: StatOverrides::EMPTY.with(StatAxis::Willpower, 15),
            ..CharacterEdits::EMPTY
        };
        let edited = apply_edits(&original, &edits);

        assert_eq!(edited.stats.willpower, 15);
        assert_eq!(edited.stats.intelligence, original.stats.intelligence);
        assert_eq!(edited.breakdown.recompose(), edited.stats);
        assert_eq!(original.breakdown.overrides, StatOverrides::EMPTY);
    }

    #[test]
    fn element_edit_recomputes_club_passive() {
        let original = character();
        let edits = CharacterEdits {
            element: Some(Element::Earth),
            ..CharacterEdits::EMPTY
        };
        let edited = apply_edits(&original, &edits);
        let affinity = &edited.element;

        assert_eq!(affinity.quadra, Some(Quadra::Delta));
        assert_eq!(affinity.club, Some(Club::Pragmatist));
        assert_eq!(
            affinity.club_passive.as_ref().map(|p| p.name.as_str()),
            Some("Field Expertise")
        );
        assert_eq!(affinity.socionics, None);
        assert!(edited.title.starts_with("Stoneheart"));
    }

    #[test]
    fn element_edit_attunes_a_character_without_socionics() {
        let original = generate_character(&GeneratorInput {
            mbti: Some(MbtiType::ISFP),
            ..GeneratorInput::default()
        })
        .unwrap();
        assert!(original.element.is_neutral());
        assert!(original.title.starts_with("Unbound"));

        let edits = CharacterEdits {
            element: Some(Element::Fire),
            ..CharacterEdits::EMPTY
        };
        let edited = apply_edits(&original, &edits);

        assert_eq!(edited.element, ElementAffinity::from_element(Element::Fire));
        assert!(
            edited
                .passives()
                .any(|p| matches!(p.source, PassiveSource::Club(_)))
        );
        assert!(!edited.title.starts_with("Unbound"));
        assert_eq!(edited.active_systems, original.active_systems);
        assert!(original.element.is_neutral());
    }

    #[test]
    fn orientation_edit_renames_the_neutral_behavior_only() {
        let original = generate_character(&GeneratorInput {
            attitudinal: Some(ApType::FVLE),
            ..GeneratorInput::default()
        })
        .unwrap();
        assert_eq!(original.combat.orientation, "Drifter");

        let edits = CharacterEdits {
            combat_orientation: Some("Sentinel".to_owned()),
            ..CharacterEdits::EMPTY
        };
        let edited = apply_edits(&original, &edits);

        assert_eq!(edited.combat.orientation, "Sentinel");
        assert_eq!(edited.combat.realm, None);
        assert_eq!(edited.combat.activation, original.combat.activation);
        assert!(edited.combat.passives.is_empty());
    }

    #[test]
    fn name_and_orientation_edits_substitute() {
        let edits = CharacterEdits {
            class_name: Some("Spellblade".to_owned()),
            ability_names: AbilityNameEdits::EMPTY.with(AbilitySlot::Child, "Sparkler"),
            combat_orientation: Some("Skirmisher".to_owned()),
            ..CharacterEdits::EMPTY
        };
        let edited = apply_edits(&character(), &edits);

        assert_eq!(edited.archetype.class_name, "Spellblade");
        assert_eq!(edited.ability(AbilitySlot::Child).name, "Sparkler");
        assert_eq!(edited.combat.orientation, "Skirmisher");
        assert_eq!(edited.combat.realm, Some(InstinctRealm::Union));
    }

    #[test]
    fn budget_compares_totals() {
        let original = character();
        assert!(is_stat_budget_valid(&original, &original.stats));
        let inflated = original.stats.with(StatAxis::Spirit, original.stats.spirit + 1);
        assert!(!is_stat_budget_valid(&original, &inflated));
    }
}
