//! Typology data tables.
//!
//! Each submodule is one self-contained typology system: its closed
//! enumerations, the static tables giving every value its mechanical meaning,
//! and the derived helpers other components use for validation (centers,
//! wings, quadras, realms).
//!
//! Every lookup is an exhaustive `match` or a table indexed by a closed enum,
//! so a missing entry is a compile error rather than a runtime fallback.

pub mod attitudinal;
pub mod enneagram;
pub mod instincts;
pub mod mbti;
pub mod socionics;

pub use attitudinal::{ApPosition, ApType, Aspect, Orientation};
pub use enneagram::{Center, EnneagramType, Instinct};
pub use instincts::{Activation, InstinctCenter, InstinctRealm, Positioning, RegenSource};
pub use mbti::{CognitiveFunction, Dichotomy, FunctionRole, MbtiType, Pole};
pub use socionics::{Club, ClubPassive, Element, Quadra, SocionicsType};

use bitflags::bitflags;

/// Identifier of one of the five typology systems.
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
pub enum SystemId {
    Attitudinal,
    Enneagram,
    Mbti,
    Socionics,
    Instincts,
}

impl SystemId {
    pub const COUNT: usize = 5;

    pub const fn all() -> [SystemId; Self::COUNT] {
        [
            SystemId::Attitudinal,
            SystemId::Enneagram,
            SystemId::Mbti,
            SystemId::Socionics,
            SystemId::Instincts,
        ]
    }

    /// The flag representing this system inside a [`SystemSet`].
    pub const fn flag(self) -> SystemSet {
        match self {
            SystemId::Attitudinal => SystemSet::ATTITUDINAL,
            SystemId::Enneagram => SystemSet::ENNEAGRAM,
            SystemId::Mbti => SystemSet::MBTI,
            SystemId::Socionics => SystemSet::SOCIONICS,
            SystemId::Instincts => SystemSet::INSTINCTS,
        }
    }

    /// Human-readable system name.
    pub const fn label(self) -> &'static str {
        match self {
            SystemId::Attitudinal => "Attitudinal Psyche",
            SystemId::Enneagram => "Enneagram",
            SystemId::Mbti => "MBTI",
            SystemId::Socionics => "Socionics",
            SystemId::Instincts => "Expanded Instincts",
        }
    }
}

bitflags! {
    /// Set of typology systems that contributed to a character.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SystemSet: u8 {
        const ATTITUDINAL = 1 << 0;
        const ENNEAGRAM = 1 << 1;
        const MBTI = 1 << 2;
        const SOCIONICS = 1 << 3;
        const INSTINCTS = 1 << 4;
    }
}

impl SystemSet {
    /// Returns true if `system` is part of the set.
    pub const fn contains_system(self, system: SystemId) -> bool {
        self.contains(system.flag())
    }

    /// Systems in the set, in canonical order.
    pub fn systems(self) -> Vec<SystemId> {
        SystemId::all()
            .into_iter()
            .filter(|system| self.contains_system(*system))
            .collect()
    }

    /// Builds a set from a list of systems.
    pub fn from_systems(systems: impl IntoIterator<Item = SystemId>) -> Self {
        systems
            .into_iter()
            .fold(SystemSet::empty(), |set, system| set | system.flag())
    }
}

/// The two additional fixes of a tritype, in order.
///
/// The core type is carried separately by the selection that owns the tritype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tritype<T> {
    pub second: T,
    pub third: T,
}

impl<T: Copy> Tritype<T> {
    pub const fn new(second: T, third: T) -> Self {
        Self { second, third }
    }

    /// Core, second fix and third fix in blend order.
    pub fn with_core(&self, core: T) -> [T; 3] {
        [core, self.second, self.third]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_set_round_trips_through_lists() {
        let set = SystemSet::from_systems([SystemId::Mbti, SystemId::Attitudinal]);
        assert_eq!(set.systems(), vec![SystemId::Attitudinal, SystemId::Mbti]);
        assert!(!set.contains_system(SystemId::Instincts));
        assert_eq!(SystemSet::all().systems().len(), SystemId::COUNT);
    }

    #[test]
    fn system_ids_parse_from_snake_case() {
        assert_eq!("instincts".parse::<SystemId>().unwrap(), SystemId::Instincts);
        assert_eq!(SystemId::Mbti.as_ref(), "mbti");
    }
}
