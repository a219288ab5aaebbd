//! MBTI cognitive functions and the eight-role (Beebe) stack.
//!
//! A type is fully determined by its hero and parent functions; the other six
//! roles follow from two transformations:
//!
//! - `complement` swaps the function family *and* attitude (Te <-> Fi, Ne <-> Si)
//! - `flip_attitude` swaps only the attitude (Te <-> Ti)
//!
//! child = complement(parent), inferior = complement(hero), and the four
//! shadow roles are the attitude-flips of the first four.

use crate::stats::StatAxis;

/// The eight cognitive functions.
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
pub enum CognitiveFunction {
    Ne,
    Ni,
    Se,
    Si,
    Te,
    Ti,
    Fe,
    Fi,
}

/// Static ability material for one function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionAbilities {
    /// Ability names for the hero, parent, child and inferior roles.
    pub names: [&'static str; 4],
    pub description: &'static str,
    pub tags: [&'static str; 2],
}

static FUNCTION_ABILITIES: [FunctionAbilities; 8] = [
    FunctionAbilities {
        names: [
            "Branching Possibilities",
            "Idea Storm",
            "Curious Spark",
            "Wild Tangent",
        ],
        description: "Spins out connections between possibilities, opening new lines of attack.",
        tags: ["ideation", "area"],
    },
    FunctionAbilities {
        names: ["Foresight", "Convergent Vision", "Hunch", "Ominous Premonition"],
        description: "Converges on a single vision of what is coming and strikes ahead of it.",
        tags: ["prophecy", "delayed"],
    },
    FunctionAbilities {
        names: [
            "Seize the Moment",
            "Kinetic Rush",
            "Playful Strike",
            "Reckless Surge",
        ],
        description: "Reacts to the immediate physical moment with speed and force.",
        tags: ["melee", "burst"],
    },
    FunctionAbilities {
        names: [
            "Ancestral Memory",
            "Steady Routine",
            "Comfort Ritual",
            "Old Habits",
        ],
        description: "Draws on stored experience to endure and restore.",
        tags: ["restoration", "endurance"],
    },
    FunctionAbilities {
        names: [
            "Command Structure",
            "Efficient Strike",
            "Quick Fix",
            "Sudden Order",
        ],
        description: "Organizes the field and drives toward measurable results.",
        tags: ["command", "buff"],
    },
    FunctionAbilities {
        names: [
            "Precise Analysis",
            "Logical Dissection",
            "Clever Angle",
            "Brittle Logic",
        ],
        description: "Dissects the enemy's reasoning to find the flaw in their defense.",
        tags: ["analysis", "debuff"],
    },
    FunctionAbilities {
        names: [
            "Rallying Cry",
            "Shared Resolve",
            "Warm Gesture",
            "Desperate Appeal",
        ],
        description: "Reads and moves the emotional tide of the whole party.",
        tags: ["support", "morale"],
    },
    FunctionAbilities {
        names: [
            "Inner Conviction",
            "Moral Compass",
            "Kindred Loyalty",
            "Wounded Pride",
        ],
        description: "Acts from deeply held values that cannot be shaken.",
        tags: ["resolve", "single_target"],
    },
];

impl CognitiveFunction {
    pub const COUNT: usize = 8;

    pub const fn all() -> [CognitiveFunction; Self::COUNT] {
        use CognitiveFunction::*;
        [Ne, Ni, Se, Si, Te, Ti, Fe, Fi]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    pub const fn is_extraverted(self) -> bool {
        matches!(
            self,
            CognitiveFunction::Ne
                | CognitiveFunction::Se
                | CognitiveFunction::Te
                | CognitiveFunction::Fe
        )
    }

    /// Perceiving (irrational) functions: Ne, Ni, Se, Si.
    pub const fn is_perceiving(self) -> bool {
        matches!(
            self,
            CognitiveFunction::Ne
                | CognitiveFunction::Ni
                | CognitiveFunction::Se
                | CognitiveFunction::Si
        )
    }

    /// Same family, opposite attitude.
    pub const fn flip_attitude(self) -> CognitiveFunction {
        use CognitiveFunction::*;
        match self {
            Ne => Ni,
            Ni => Ne,
            Se => Si,
            Si => Se,
            Te => Ti,
            Ti => Te,
            Fe => Fi,
            Fi => Fe,
        }
    }

    /// Opposite family and opposite attitude.
    pub const fn complement(self) -> CognitiveFunction {
        use CognitiveFunction::*;
        match self {
            Ne => Si,
            Si => Ne,
            Ni => Se,
            Se => Ni,
            Te => Fi,
            Fi => Te,
            Ti => Fe,
            Fe => Ti,
        }
    }

    /// The stat an ability built on this function scales with.
    pub const fn scaling_stat(self) -> StatAxis {
        use CognitiveFunction::*;
        match self {
            Te | Fi => StatAxis::Willpower,
            Ti | Ne => StatAxis::Intelligence,
            Fe | Ni => StatAxis::Spirit,
            Se | Si => StatAxis::Vitality,
        }
    }

    /// The type-letter pole this function expresses (N, S, T or F).
    pub const fn pole(self) -> Pole {
        use CognitiveFunction::*;
        match self {
            Ne | Ni => Pole::N,
            Se | Si => Pole::S,
            Te | Ti => Pole::T,
            Fe | Fi => Pole::F,
        }
    }

    pub const fn name(self) -> &'static str {
        use CognitiveFunction::*;
        match self {
            Ne => "Extraverted Intuition",
            Ni => "Introverted Intuition",
            Se => "Extraverted Sensing",
            Si => "Introverted Sensing",
            Te => "Extraverted Thinking",
            Ti => "Introverted Thinking",
            Fe => "Extraverted Feeling",
            Fi => "Introverted Feeling",
        }
    }

    pub fn abilities(self) -> &'static FunctionAbilities {
        &FUNCTION_ABILITIES[self.as_index()]
    }
}

/// The eight positions of the Beebe stack.
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
pub enum FunctionRole {
    Hero = 0,
    Parent = 1,
    Child = 2,
    Inferior = 3,
    Nemesis = 4,
    Critic = 5,
    Trickster = 6,
    Demon = 7,
}

impl FunctionRole {
    pub const COUNT: usize = 8;

    pub const fn all() -> [FunctionRole; Self::COUNT] {
        use FunctionRole::*;
        [
            Hero, Parent, Child, Inferior, Nemesis, Critic, Trickster, Demon,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Hero through inferior are conscious; the rest are shadow roles.
    pub const fn is_shadow(self) -> bool {
        self.as_index() >= 4
    }
}

/// One letter of a four-letter type.
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
pub enum Pole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

/// The four dichotomies, in type-letter order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dichotomy {
    EI,
    SN,
    TF,
    JP,
}

impl Dichotomy {
    pub const COUNT: usize = 4;

    pub const fn all() -> [Dichotomy; Self::COUNT] {
        [Dichotomy::EI, Dichotomy::SN, Dichotomy::TF, Dichotomy::JP]
    }

    /// Both poles; the first one wins a tied score.
    pub const fn poles(self) -> [Pole; 2] {
        match self {
            Dichotomy::EI => [Pole::E, Pole::I],
            Dichotomy::SN => [Pole::S, Pole::N],
            Dichotomy::TF => [Pole::T, Pole::F],
            Dichotomy::JP => [Pole::J, Pole::P],
        }
    }
}

impl Pole {
    pub const COUNT: usize = 8;

    pub const fn all() -> [Pole; Self::COUNT] {
        use Pole::*;
        [E, I, S, N, T, F, J, P]
    }

    pub const fn dichotomy(self) -> Dichotomy {
        match self {
            Pole::E | Pole::I => Dichotomy::EI,
            Pole::S | Pole::N => Dichotomy::SN,
            Pole::T | Pole::F => Dichotomy::TF,
            Pole::J | Pole::P => Dichotomy::JP,
        }
    }

    pub const fn opposite(self) -> Pole {
        match self {
            Pole::E => Pole::I,
            Pole::I => Pole::E,
            Pole::S => Pole::N,
            Pole::N => Pole::S,
            Pole::T => Pole::F,
            Pole::F => Pole::T,
            Pole::J => Pole::P,
            Pole::P => Pole::J,
        }
    }
}

/// The sixteen MBTI types.
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
pub enum MbtiType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl MbtiType {
    pub const COUNT: usize = 16;

    pub const fn all() -> [MbtiType; Self::COUNT] {
        use MbtiType::*;
        [
            INTJ, INTP, ENTJ, ENTP, INFJ, INFP, ENFJ, ENFP, ISTJ, ISFJ, ESTJ, ESFJ, ISTP, ISFP,
            ESTP, ESFP,
        ]
    }

    /// Hero and parent functions.
    pub const fn hero_parent(self) -> (CognitiveFunction, CognitiveFunction) {
        use CognitiveFunction::*;
        match self {
            MbtiType::INTJ => (Ni, Te),
            MbtiType::INTP => (Ti, Ne),
            MbtiType::ENTJ => (Te, Ni),
            MbtiType::ENTP => (Ne, Ti),
            MbtiType::INFJ => (Ni, Fe),
            MbtiType::INFP => (Fi, Ne),
            MbtiType::ENFJ => (Fe, Ni),
            MbtiType::ENFP => (Ne, Fi),
            MbtiType::ISTJ => (Si, Te),
            MbtiType::ISFJ => (Si, Fe),
            MbtiType::ESTJ => (Te, Si),
            MbtiType::ESFJ => (Fe, Si),
            MbtiType::ISTP => (Ti, Se),
            MbtiType::ISFP => (Fi, Se),
            MbtiType::ESTP => (Se, Ti),
            MbtiType::ESFP => (Se, Fi),
        }
    }

    /// All eight functions in role order (hero .. demon).
    pub const fn function_stack(self) -> [CognitiveFunction; FunctionRole::COUNT] {
        let (hero, parent) = self.hero_parent();
        let child = parent.complement();
        let inferior = hero.complement();
        [
            hero,
            parent,
            child,
            inferior,
            hero.flip_attitude(),
            parent.flip_attitude(),
            child.flip_attitude(),
            inferior.flip_attitude(),
        ]
    }

    pub const fn function_at(self, role: FunctionRole) -> CognitiveFunction {
        self.function_stack()[role.as_index()]
    }

    /// The role a function plays for this type. Every function appears exactly once.
    pub fn role_of(self, function: CognitiveFunction) -> FunctionRole {
        let stack = self.function_stack();
        FunctionRole::all()
            .into_iter()
            .find(|role| stack[role.as_index()] == function)
            .unwrap_or(FunctionRole::Demon)
    }

    /// Type letters, derived from the stack.
    pub const fn poles(self) -> [Pole; 4] {
        let (hero, parent) = self.hero_parent();
        let (perceiving, judging) = if hero.is_perceiving() {
            (hero, parent)
        } else {
            (parent, hero)
        };
        let energy = if hero.is_extraverted() { Pole::E } else { Pole::I };
        // J/P names the attitude of whichever function is extraverted.
        let extraverted = if hero.is_extraverted() { hero } else { parent };
        let lifestyle = if extraverted.is_perceiving() {
            Pole::P
        } else {
            Pole::J
        };
        [energy, perceiving.pole(), judging.pole(), lifestyle]
    }

    pub fn from_poles(poles: [Pole; 4]) -> Option<MbtiType> {
        Self::all().into_iter().find(|ty| ty.poles() == poles)
    }

    pub fn from_hero_parent(hero: CognitiveFunction, parent: CognitiveFunction) -> Option<MbtiType> {
        Self::all()
            .into_iter()
            .find(|ty| ty.hero_parent() == (hero, parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_match_type_names() {
        for ty in MbtiType::all() {
            let letters: String = ty.poles().iter().map(|pole| pole.to_string()).collect();
            assert_eq!(letters, ty.as_ref());
            assert_eq!(MbtiType::from_poles(ty.poles()), Some(ty));
        }
    }

    #[test]
    fn stacks_contain_every_function_once() {
        for ty in MbtiType::all() {
            let stack = ty.function_stack();
            for function in CognitiveFunction::all() {
                assert_eq!(stack.iter().filter(|f| **f == function).count(), 1);
            }
        }
    }

    #[test]
    fn intj_stack_follows_beebe_model() {
        use CognitiveFunction::*;
        assert_eq!(
            MbtiType::INTJ.function_stack(),
            [Ni, Te, Fi, Se, Ne, Ti, Fe, Si]
        );
        assert_eq!(MbtiType::INTJ.role_of(Se), FunctionRole::Inferior);
        assert_eq!(MbtiType::ESFP.function_at(FunctionRole::Child), Te);
    }

    #[test]
    fn hero_parent_pairs_are_unique() {
        for ty in MbtiType::all() {
            let (hero, parent) = ty.hero_parent();
            assert_eq!(MbtiType::from_hero_parent(hero, parent), Some(ty));
        }
        assert_eq!(
            MbtiType::from_hero_parent(CognitiveFunction::Ni, CognitiveFunction::Ne),
            None
        );
    }

    #[test]
    fn complement_and_flip_are_involutions() {
        for function in CognitiveFunction::all() {
            assert_eq!(function.complement().complement(), function);
            assert_eq!(function.flip_attitude().flip_attitude(), function);
            assert_ne!(function.complement().is_extraverted(), function.is_extraverted());
        }
    }
}
