//! Character derivation.
//!
//! ```text
//! GeneratorInput ──validate──► builders ──► Character
//!                                               │
//!                    CharacterEdits ──apply──►  ├─► edited view
//!                    other Character ─diff──►   └─► CharacterDiff
//! ```
//!
//! A [`Character`] is only ever produced by [`generate_character`]; the edit
//! layer returns a new value and never touches the original.

pub mod abilities;
pub mod archetype;
pub mod combat;
pub mod diff;
pub mod edits;
pub mod element;
pub mod generator;
pub mod naming;
pub mod summary;

pub use abilities::{
    Ability, AbilityKit, AbilitySlot, build_ability_kit, compute_power, neutral_ability_kit,
};
pub use archetype::{
    Archetype, BlendPosition, EffectKind, EnneagramSelection, LineDescriptor, PassiveList,
    PassiveSource, PassiveTrait, StatBlendStep, StatusEffect, WingTrait, archetype_passive_list,
    build_archetype, build_tritype_archetype, neutral_archetype,
};
pub use combat::{
    CombatBehavior, InstinctSelection, build_combat_behavior, neutral_combat_behavior,
};
pub use diff::{AbilityComparison, AbilityKey, CharacterDiff, StatDelta, compute_character_diff};
pub use edits::{AbilityNameEdits, CharacterEdits, apply_edits, is_stat_budget_valid};
pub use element::{ElementAffinity, build_element_affinity, neutral_element_affinity};
pub use generator::{GeneratorInput, ManualOverrides, TypologySource, generate_character};
pub use summary::build_typology_summary;

use crate::stats::{StatBlock, StatBreakdown};
use crate::systems::SystemSet;

/// A fully derived character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub title: String,
    pub stats: StatBlock,
    pub breakdown: StatBreakdown,
    pub archetype: Archetype,
    pub abilities: AbilityKit,
    /// Neutral when the socionics system is disabled.
    pub element: ElementAffinity,
    /// Neutral when the instincts system is disabled.
    pub combat: CombatBehavior,
    pub active_systems: SystemSet,
    pub typology_source: TypologySource,
}

impl Character {
    pub fn ability(&self, slot: AbilitySlot) -> &Ability {
        &self.abilities[slot.as_index()]
    }

    /// Displayed power of the ability in `slot`.
    pub fn ability_power(&self, slot: AbilitySlot) -> i32 {
        self.ability(slot).power(&self.stats)
    }

    /// Every passive the character carries: archetype, club, then combat.
    pub fn passives(&self) -> impl Iterator<Item = &PassiveTrait> + '_ {
        self.archetype
            .passives
            .iter()
            .chain(self.element.club_passive.iter())
            .chain(self.combat.passives.iter())
    }
}
