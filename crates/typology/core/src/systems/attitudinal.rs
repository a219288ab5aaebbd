//! Attitudinal Psyche - the cognitive-priority system.
//!
//! A type is an ordering of the four aspects (Volition, Logic, Emotion,
//! Physics) by priority. The position an aspect occupies determines the base
//! value of the stat axis it maps to.

use crate::config::EngineConfig;
use crate::stats::StatAxis;

/// One of the four cognitive aspects.
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
#[strum(ascii_case_insensitive)]
pub enum Aspect {
    /// V - will, decisiveness, control over direction.
    #[strum(to_string = "V", serialize = "volition")]
    Volition,
    /// L - reasoning, structure, truth-seeking.
    #[strum(to_string = "L", serialize = "logic")]
    Logic,
    /// E - feeling, expression, mood.
    #[strum(to_string = "E", serialize = "emotion")]
    Emotion,
    /// F - body, comfort, material reality.
    #[strum(to_string = "F", serialize = "physics")]
    Physics,
}

impl Aspect {
    pub const COUNT: usize = 4;

    pub const fn all() -> [Aspect; Self::COUNT] {
        [Aspect::Volition, Aspect::Logic, Aspect::Emotion, Aspect::Physics]
    }

    /// Single-letter code used in type names (`F` stands for Physics).
    pub const fn letter(self) -> char {
        match self {
            Aspect::Volition => 'V',
            Aspect::Logic => 'L',
            Aspect::Emotion => 'E',
            Aspect::Physics => 'F',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Aspect> {
        match letter.to_ascii_uppercase() {
            'V' => Some(Aspect::Volition),
            'L' => Some(Aspect::Logic),
            'E' => Some(Aspect::Emotion),
            'F' => Some(Aspect::Physics),
            _ => None,
        }
    }

    /// The stat axis this aspect feeds.
    pub const fn stat_axis(self) -> StatAxis {
        match self {
            Aspect::Volition => StatAxis::Willpower,
            Aspect::Logic => StatAxis::Intelligence,
            Aspect::Emotion => StatAxis::Spirit,
            Aspect::Physics => StatAxis::Vitality,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Aspect::Volition => "Volition",
            Aspect::Logic => "Logic",
            Aspect::Emotion => "Emotion",
            Aspect::Physics => "Physics",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Aspect::Volition => "Will, decisiveness and the drive to set direction.",
            Aspect::Logic => "Reasoning, structure and the pursuit of what is true.",
            Aspect::Emotion => "Feeling, expression and the tone of a moment.",
            Aspect::Physics => "The body, comfort and the material world.",
        }
    }
}

/// Whether a position cares about outcomes or about the path to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Result,
    Process,
}

/// One of the four priority positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ApPosition {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
}

impl ApPosition {
    pub const COUNT: usize = 4;

    pub const fn all() -> [ApPosition; Self::COUNT] {
        [
            ApPosition::First,
            ApPosition::Second,
            ApPosition::Third,
            ApPosition::Fourth,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Base stat granted to the aspect in this position.
    pub const fn stat_value(self) -> i32 {
        EngineConfig::POSITION_VALUES[self.as_index()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApPosition::First => "Confident",
            ApPosition::Second => "Flexible",
            ApPosition::Third => "Insecure",
            ApPosition::Fourth => "Unbothered",
        }
    }

    /// 1st and 4th positions are result-oriented, 2nd and 3rd process-oriented.
    pub const fn orientation(self) -> Orientation {
        match self {
            ApPosition::First | ApPosition::Fourth => Orientation::Result,
            ApPosition::Second | ApPosition::Third => Orientation::Process,
        }
    }
}

/// The 24 Attitudinal Psyche types, named by their aspect ordering.
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
#[strum(ascii_case_insensitive)]
pub enum ApType {
    VLEF,
    VLFE,
    VELF,
    VEFL,
    VFLE,
    VFEL,
    LVEF,
    LVFE,
    LEVF,
    LEFV,
    LFVE,
    LFEV,
    EVLF,
    EVFL,
    ELVF,
    ELFV,
    EFVL,
    EFLV,
    FVLE,
    FVEL,
    FLVE,
    FLEV,
    FEVL,
    FELV,
}

impl ApType {
    pub const COUNT: usize = 24;

    pub const fn all() -> [ApType; Self::COUNT] {
        use ApType::*;
        [
            VLEF, VLFE, VELF, VEFL, VFLE, VFEL, LVEF, LVFE, LEVF, LEFV, LFVE, LFEV, EVLF, EVFL,
            ELVF, ELFV, EFVL, EFLV, FVLE, FVEL, FLVE, FLEV, FEVL, FELV,
        ]
    }

    /// Aspects from 1st to 4th position.
    pub const fn aspects(self) -> [Aspect; 4] {
        use Aspect::{Emotion as E, Logic as L, Physics as F, Volition as V};
        match self {
            ApType::VLEF => [V, L, E, F],
            ApType::VLFE => [V, L, F, E],
            ApType::VELF => [V, E, L, F],
            ApType::VEFL => [V, E, F, L],
            ApType::VFLE => [V, F, L, E],
            ApType::VFEL => [V, F, E, L],
            ApType::LVEF => [L, V, E, F],
            ApType::LVFE => [L, V, F, E],
            ApType::LEVF => [L, E, V, F],
            ApType::LEFV => [L, E, F, V],
            ApType::LFVE => [L, F, V, E],
            ApType::LFEV => [L, F, E, V],
            ApType::EVLF => [E, V, L, F],
            ApType::EVFL => [E, V, F, L],
            ApType::ELVF => [E, L, V, F],
            ApType::ELFV => [E, L, F, V],
            ApType::EFVL => [E, F, V, L],
            ApType::EFLV => [E, F, L, V],
            ApType::FVLE => [F, V, L, E],
            ApType::FVEL => [F, V, E, L],
            ApType::FLVE => [F, L, V, E],
            ApType::FLEV => [F, L, E, V],
            ApType::FEVL => [F, E, V, L],
            ApType::FELV => [F, E, L, V],
        }
    }

    /// Finds the type with the given ordering.
    ///
    /// Returns `None` if the ordering repeats an aspect.
    pub fn from_aspects(order: [Aspect; 4]) -> Option<ApType> {
        Self::all().into_iter().find(|ty| ty.aspects() == order)
    }

    /// The aspect occupying a position.
    pub const fn aspect_at(self, position: ApPosition) -> Aspect {
        self.aspects()[position.as_index()]
    }

    /// The position an aspect occupies in this type.
    pub fn position_of(self, aspect: Aspect) -> ApPosition {
        let aspects = self.aspects();
        ApPosition::all()
            .into_iter()
            .find(|position| aspects[position.as_index()] == aspect)
            .unwrap_or(ApPosition::Fourth)
    }

    /// The aspect this type is most confident in.
    pub const fn lead_aspect(self) -> Aspect {
        self.aspects()[0]
    }

    /// One-line reading of the ordering, e.g. "Confident Volition, Flexible Emotion, ...".
    pub fn describe(self) -> String {
        ApPosition::all()
            .into_iter()
            .map(|position| {
                format!("{} {}", position.label(), self.aspect_at(position).name())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_is_a_permutation() {
        for ty in ApType::all() {
            let aspects = ty.aspects();
            for aspect in Aspect::all() {
                assert_eq!(
                    aspects.iter().filter(|a| **a == aspect).count(),
                    1,
                    "{ty} must contain {aspect} exactly once"
                );
            }
            let name: String = aspects.iter().map(|a| a.letter()).collect();
            assert_eq!(name, ty.as_ref());
        }
    }

    #[test]
    fn ordering_lookup_is_total_and_unique() {
        for ty in ApType::all() {
            assert_eq!(ApType::from_aspects(ty.aspects()), Some(ty));
        }
        let repeated = [
            Aspect::Volition,
            Aspect::Volition,
            Aspect::Logic,
            Aspect::Emotion,
        ];
        assert_eq!(ApType::from_aspects(repeated), None);
    }

    #[test]
    fn positions_follow_the_ordering() {
        let ty: ApType = "velf".parse().unwrap();
        assert_eq!(ty, ApType::VELF);
        assert_eq!(ty.position_of(Aspect::Volition), ApPosition::First);
        assert_eq!(ty.position_of(Aspect::Physics), ApPosition::Fourth);
        assert_eq!(ty.aspect_at(ApPosition::Second), Aspect::Emotion);
        assert_eq!(ApPosition::Third.orientation(), Orientation::Process);
        assert_eq!(ApPosition::First.stat_value(), 14);
    }

    #[test]
    fn aspect_letters_parse() {
        assert_eq!("F".parse::<Aspect>().unwrap(), Aspect::Physics);
        assert_eq!(Aspect::from_letter('l'), Some(Aspect::Logic));
        assert_eq!(Aspect::from_letter('x'), None);
    }
}
