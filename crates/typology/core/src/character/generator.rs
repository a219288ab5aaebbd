//! Character generator.
//!
//! Validates a [`GeneratorInput`], runs the five builders and assembles the
//! [`Character`]. Each system is optional: an absent selection falls back to
//! its builder's neutral default and is left out of the active system set.

use sha2::{Digest, Sha256};

use super::Character;
use super::abilities::{build_ability_kit, neutral_ability_kit};
use super::archetype::{EnneagramSelection, build_archetype, neutral_archetype};
use super::combat::{InstinctSelection, build_combat_behavior, neutral_combat_behavior};
use super::element::{build_element_affinity, neutral_element_affinity};
use super::naming::{generate_name, generate_title};
use crate::config::EngineConfig;
use crate::error::InputError;
use crate::stats::{StatOverrides, compose_stats};
use crate::systems::{ApType, MbtiType, SocionicsType, SystemSet};

/// Manual corrections supplied together with the selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManualOverrides {
    pub stats: StatOverrides,
}

/// Every selection needed to generate a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorInput {
    pub attitudinal: Option<ApType>,
    pub enneagram: Option<EnneagramSelection>,
    pub mbti: Option<MbtiType>,
    pub socionics: Option<SocionicsType>,
    pub instincts: Option<InstinctSelection>,
    pub overrides: ManualOverrides,
    /// Seed for the cosmetic name. Defaults to [`EngineConfig::DEFAULT_NAME_SEED`].
    pub seed: Option<u64>,
}

/// The raw inputs a character was generated from.
///
/// Regenerating from a character's source reproduces the character exactly.
pub type TypologySource = GeneratorInput;

impl GeneratorInput {
    /// Systems with a selection present.
    pub fn active_systems(&self) -> SystemSet {
        let mut systems = SystemSet::empty();
        systems.set(SystemSet::ATTITUDINAL, self.attitudinal.is_some());
        systems.set(SystemSet::ENNEAGRAM, self.enneagram.is_some());
        systems.set(SystemSet::MBTI, self.mbti.is_some());
        systems.set(SystemSet::SOCIONICS, self.socionics.is_some());
        systems.set(SystemSet::INSTINCTS, self.instincts.is_some());
        systems
    }

    /// Checks every cross-field rule of the enabled systems.
    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(enneagram) = &self.enneagram {
            enneagram.validate()?;
        }
        if let Some(instincts) = &self.instincts {
            instincts.validate()?;
        }
        Ok(())
    }

    /// Copy with only the systems in `enabled` kept.
    #[must_use]
    pub fn restricted_to(&self, enabled: SystemSet) -> Self {
        Self {
            attitudinal: self
                .attitudinal
                .filter(|_| enabled.contains(SystemSet::ATTITUDINAL)),
            enneagram: self
                .enneagram
                .filter(|_| enabled.contains(SystemSet::ENNEAGRAM)),
            mbti: self.mbti.filter(|_| enabled.contains(SystemSet::MBTI)),
            socionics: self
                .socionics
                .filter(|_| enabled.contains(SystemSet::SOCIONICS)),
            instincts: self
                .instincts
                .filter(|_| enabled.contains(SystemSet::INSTINCTS)),
            ..*self
        }
    }

    /// Stable one-line rendering, e.g.
    /// `ap=VELF;enn=5w4 sp;mbti=INTJ;soc=ILI;inst=FD;stats=-,-,-,-;seed=-`.
    pub fn canonical_text(&self) -> String {
        fn opt<T: ToString>(value: Option<T>) -> String {
            value.map_or_else(|| "-".to_owned(), |value| value.to_string())
        }

        let enneagram = self.enneagram.map(|sel| {
            let mut text = format!("{}w{} {}", sel.core, sel.wing, sel.instinct);
            if let Some(stack) = sel.instinct_stack {
                text.push_str(&format!("/{stack}"));
            }
            if let Some(tritype) = sel.tritype {
                text.push_str(&format!(" {}{}{}", sel.core, tritype.second, tritype.third));
            }
            text
        });
        let instincts = self.instincts.map(|sel| match sel.tritype {
            Some(tritype) => format!("{} {}-{}", sel.realm, tritype.second, tritype.third),
            None => sel.realm.to_string(),
        });
        let stats = &self.overrides.stats;

        format!(
            "ap={};enn={};mbti={};soc={};inst={};stats={},{},{},{};seed={}",
            opt(self.attitudinal),
            opt(enneagram),
            opt(self.mbti),
            opt(self.socionics),
            opt(instincts),
            opt(stats.willpower),
            opt(stats.intelligence),
            opt(stats.spirit),
            opt(stats.vitality),
            opt(self.seed),
        )
    }

    /// SHA-256 of [`canonical_text`](Self::canonical_text).
    pub fn fingerprint(&self) -> [u8; 32] {
        Sha256::digest(self.canonical_text().as_bytes()).into()
    }
}

/// Generates a character from validated selections.
///
/// Deterministic: the same input always yields an equal character.
pub fn generate_character(input: &GeneratorInput) -> Result<Character, InputError> {
    input.validate()?;

    let archetype = input
        .enneagram
        .as_ref()
        .map_or_else(neutral_archetype, build_archetype);

    let (stats, breakdown) = compose_stats(
        input.attitudinal,
        &archetype.multipliers,
        archetype.multiplier_source(),
        &input.overrides.stats,
    );

    let abilities = input
        .mbti
        .map_or_else(neutral_ability_kit, build_ability_kit);
    let element = input
        .socionics
        .map_or_else(neutral_element_affinity, build_element_affinity);
    let combat = input
        .instincts
        .as_ref()
        .map_or_else(neutral_combat_behavior, build_combat_behavior);

    let seed = input.seed.unwrap_or(EngineConfig::DEFAULT_NAME_SEED);
    let name = generate_name(seed, element.element, &archetype.class_name);
    let title = generate_title(element.element, &archetype.class_name);
    let active_systems = input.active_systems();

    tracing::debug!(
        %name,
        class = %archetype.class_name,
        systems = active_systems.bits(),
        "generated character"
    );

    Ok(Character {
        name,
        title,
        stats,
        breakdown,
        archetype,
        abilities,
        element,
        combat,
        active_systems,
        typology_source: *input,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{EnneagramType, Instinct, InstinctRealm};

    fn full_input() -> GeneratorInput {
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
    fn canonical_text_is_stable() {
        let input = full_input();
        assert_eq!(
            input.canonical_text(),
            "ap=VELF;enn=5w4 sp;mbti=INTJ;soc=ILI;inst=FD;stats=-,-,-,-;seed=-"
        );
        assert_eq!(input.fingerprint(), full_input().fingerprint());
        assert_ne!(
            input.fingerprint(),
            GeneratorInput::default().fingerprint()
        );
    }

    #[test]
    fn restriction_drops_disabled_systems() {
        let input = full_input().restricted_to(SystemSet::MBTI | SystemSet::SOCIONICS);
        assert_eq!(input.active_systems(), SystemSet::MBTI | SystemSet::SOCIONICS);
        assert!(input.enneagram.is_none());
    }

    #[test]
    fn generation_stops_at_invalid_input() {
        let mut input = full_input();
        input.enneagram = input
            .enneagram
            .map(|sel| sel.with_tritype(EnneagramType::Six, EnneagramType::One));
        assert!(generate_character(&input).is_err());
    }

    #[test]
    fn source_regenerates_the_same_character() {
        let character = generate_character(&full_input()).unwrap();
        let again = generate_character(&character.typology_source).unwrap();
        assert_eq!(character, again);
    }
}
