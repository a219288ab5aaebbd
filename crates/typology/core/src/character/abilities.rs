//! Ability kit builder.
//!
//! The four conscious roles of the MBTI function stack (hero, parent, child,
//! inferior) become the four ability slots. Each ability scales with the stat
//! its function maps to:
//!
//! ```text
//! power = base_power + floor(clamp(stat) / POWER_SCALING_DIVISOR)
//! ```
//!
//! Power is never stored; callers compute it against the final stat block.

use crate::config::EngineConfig;
use crate::stats::{StatAxis, StatBlock, clamp_stat};
use crate::systems::{CognitiveFunction, FunctionRole, MbtiType};

/// The four fixed ability slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum AbilitySlot {
    Hero = 0,
    Parent = 1,
    Child = 2,
    Inferior = 3,
}

impl AbilitySlot {
    pub const COUNT: usize = 4;

    pub const fn all() -> [AbilitySlot; Self::COUNT] {
        [
            AbilitySlot::Hero,
            AbilitySlot::Parent,
            AbilitySlot::Child,
            AbilitySlot::Inferior,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// The stack role this slot materializes.
    pub const fn role(self) -> FunctionRole {
        match self {
            AbilitySlot::Hero => FunctionRole::Hero,
            AbilitySlot::Parent => FunctionRole::Parent,
            AbilitySlot::Child => FunctionRole::Child,
            AbilitySlot::Inferior => FunctionRole::Inferior,
        }
    }

    pub const fn base_power(self) -> i32 {
        EngineConfig::SLOT_BASE_POWER[self.as_index()]
    }

    const fn flavor(self) -> &'static str {
        match self {
            AbilitySlot::Hero => "Wielded with full mastery.",
            AbilitySlot::Parent => "Used responsibly, in service of others.",
            AbilitySlot::Child => "Used playfully, with a light touch.",
            AbilitySlot::Inferior => "Unreliable, but startlingly potent under pressure.",
        }
    }
}

/// One combat ability.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub slot: AbilitySlot,
    pub name: String,
    pub description: String,
    /// Function the ability draws on; `None` only in the neutral kit.
    pub function: Option<CognitiveFunction>,
    pub base_power: i32,
    pub scaling_stat: StatAxis,
    pub tags: Vec<String>,
}

/// Exactly one ability per slot, in slot order.
pub type AbilityKit = [Ability; AbilitySlot::COUNT];

impl Ability {
    /// Displayed power against a stat block.
    pub fn power(&self, stats: &StatBlock) -> i32 {
        compute_power(self.base_power, stats.get(self.scaling_stat))
    }

    /// Highest power this ability can ever display.
    pub const fn max_power(&self) -> i32 {
        EngineConfig::power_ceiling(self.base_power)
    }
}

/// Power formula shared by every ability.
///
/// Monotonic in `stat_value`; bounded by [`EngineConfig::power_ceiling`].
pub fn compute_power(base_power: i32, stat_value: i32) -> i32 {
    base_power + clamp_stat(stat_value).div_euclid(EngineConfig::POWER_SCALING_DIVISOR)
}

fn build_ability(function: CognitiveFunction, slot: AbilitySlot) -> Ability {
    let material = function.abilities();
    let mut tags: Vec<String> = material.tags.iter().map(|tag| (*tag).to_owned()).collect();
    tags.push(slot.as_ref().to_owned());

    Ability {
        slot,
        name: material.names[slot.as_index()].to_owned(),
        description: format!("{} {}", material.description, slot.flavor()),
        function: Some(function),
        base_power: slot.base_power(),
        scaling_stat: function.scaling_stat(),
        tags,
    }
}

/// Builds the four abilities of an MBTI type.
pub fn build_ability_kit(ty: MbtiType) -> AbilityKit {
    AbilitySlot::all().map(|slot| build_ability(ty.function_at(slot.role()), slot))
}

/// Kit used when the MBTI system is disabled.
pub fn neutral_ability_kit() -> AbilityKit {
    AbilitySlot::all().map(|slot| {
        let (name, scaling_stat) = match slot {
            AbilitySlot::Hero => ("Improvised Strike", StatAxis::Willpower),
            AbilitySlot::Parent => ("Steady Guard", StatAxis::Vitality),
            AbilitySlot::Child => ("Quick Wit", StatAxis::Intelligence),
            AbilitySlot::Inferior => ("Last Resort", StatAxis::Spirit),
        };
        Ability {
            slot,
            name: name.to_owned(),
            description: format!("An unattuned technique. {}", slot.flavor()),
            function: None,
            base_power: slot.base_power(),
            scaling_stat,
            tags: vec!["unattuned".to_owned(), slot.as_ref().to_owned()],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_has_one_ability_per_slot() {
        for ty in MbtiType::all() {
            let kit = build_ability_kit(ty);
            for (slot, ability) in AbilitySlot::all().into_iter().zip(kit.iter()) {
                assert_eq!(ability.slot, slot);
                assert_eq!(ability.function, Some(ty.function_at(slot.role())));
            }
        }
    }

    #[test]
    fn intj_kit_matches_stack() {
        let kit = build_ability_kit(MbtiType::INTJ);
        assert_eq!(kit[0].name, "Foresight");
        assert_eq!(kit[0].scaling_stat, StatAxis::Spirit);
        assert_eq!(kit[1].function, Some(CognitiveFunction::Te));
        assert_eq!(kit[3].name, "Reckless Surge");
        assert_eq!(kit[3].base_power, 4);
        assert!(kit[2].tags.contains(&"child".to_owned()));
    }

    #[test]
    fn power_is_monotonic_and_capped() {
        let mut previous = compute_power(10, -5);
        for stat in -5..=40 {
            let power = compute_power(10, stat);
            assert!(power >= previous);
            assert!(power <= EngineConfig::power_ceiling(10));
            previous = power;
        }
        assert_eq!(compute_power(10, 15), 17);
        assert_eq!(compute_power(10, 20), EngineConfig::power_ceiling(10));
    }

    #[test]
    fn base_power_decreases_by_slot() {
        let powers = AbilitySlot::all().map(AbilitySlot::base_power);
        assert!(powers.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(neutral_ability_kit().iter().all(|a| a.function.is_none()));
    }
}
