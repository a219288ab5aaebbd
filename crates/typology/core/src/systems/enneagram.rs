//! Enneagram - the motivational-type system.
//!
//! Nine core types grouped into three centers, each with two adjacent wings,
//! three instinctual variants and growth/stress lines. The type decides the
//! character class and its stat multiplier template; the instinct decides the
//! passive trait.

use crate::error::InputError;
use crate::stats::{StatAxis, StatMultipliers};

use super::Tritype;

/// The nine Enneagram types.
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
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum EnneagramType {
    #[strum(serialize = "1")]
    One = 1,
    #[strum(serialize = "2")]
    Two = 2,
    #[strum(serialize = "3")]
    Three = 3,
    #[strum(serialize = "4")]
    Four = 4,
    #[strum(serialize = "5")]
    Five = 5,
    #[strum(serialize = "6")]
    Six = 6,
    #[strum(serialize = "7")]
    Seven = 7,
    #[strum(serialize = "8")]
    Eight = 8,
    #[strum(serialize = "9")]
    Nine = 9,
}

/// The three centers of intelligence. Tritype fixes must span all three.
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
pub enum Center {
    /// Body / instinctive center (8, 9, 1) - anger.
    Gut,
    /// Feeling / image center (2, 3, 4) - shame.
    Heart,
    /// Thinking center (5, 6, 7) - fear.
    Head,
}

impl Center {
    pub const COUNT: usize = 3;

    pub const fn all() -> [Center; Self::COUNT] {
        [Center::Gut, Center::Heart, Center::Head]
    }

    /// The three types belonging to this center, in numeric order.
    pub const fn types(self) -> [EnneagramType; 3] {
        use EnneagramType::*;
        match self {
            Center::Gut => [One, Eight, Nine],
            Center::Heart => [Two, Three, Four],
            Center::Head => [Five, Six, Seven],
        }
    }

    /// The two centers other than this one.
    pub const fn others(self) -> [Center; 2] {
        match self {
            Center::Gut => [Center::Heart, Center::Head],
            Center::Heart => [Center::Gut, Center::Head],
            Center::Head => [Center::Gut, Center::Heart],
        }
    }
}

/// The three instinctual variants.
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
pub enum Instinct {
    #[cfg_attr(feature = "serde", serde(rename = "sp"))]
    #[strum(to_string = "sp", serialize = "self_preservation")]
    SelfPreservation,
    #[cfg_attr(feature = "serde", serde(rename = "so"))]
    #[strum(to_string = "so", serialize = "social")]
    Social,
    #[cfg_attr(feature = "serde", serde(rename = "sx"))]
    #[strum(to_string = "sx", serialize = "sexual", serialize = "one_to_one")]
    Sexual,
}

impl Instinct {
    pub const COUNT: usize = 3;

    pub const fn all() -> [Instinct; Self::COUNT] {
        [Instinct::SelfPreservation, Instinct::Social, Instinct::Sexual]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Instinct::SelfPreservation => "Self-Preservation",
            Instinct::Social => "Social",
            Instinct::Sexual => "One-to-One",
        }
    }
}

/// Static profile of one Enneagram type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeProfile {
    /// Classic type name ("Reformer", "Helper", ...).
    pub name: &'static str,
    /// Character class granted by the type.
    pub class_name: &'static str,
    pub class_description: &'static str,
    /// Stat multiplier template applied to the base stat block.
    pub multipliers: StatMultipliers,
    /// Integration (growth) line target.
    pub growth: EnneagramType,
    /// Disintegration (stress) line target.
    pub stress: EnneagramType,
    pub empowered: EffectSpec,
    pub stressed: EffectSpec,
}

/// Static description of a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub axis: StatAxis,
    pub amount: i32,
}

/// Static description of a passive trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraitSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Flavor shift granted by a wing. Wings never change stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WingFlavor {
    pub title: &'static str,
    pub trait_shift: &'static str,
}

const fn effect(
    name: &'static str,
    axis: StatAxis,
    amount: i32,
    description: &'static str,
) -> EffectSpec {
    EffectSpec {
        name,
        description,
        axis,
        amount,
    }
}

const fn passive(name: &'static str, description: &'static str) -> TraitSpec {
    TraitSpec { name, description }
}

const fn wing(title: &'static str, trait_shift: &'static str) -> WingFlavor {
    WingFlavor { title, trait_shift }
}

static TYPE_PROFILES: [TypeProfile; 9] = [
    TypeProfile {
        name: "Reformer",
        class_name: "Paladin",
        class_description: "A crusader of principle who holds the line between right and wrong.",
        multipliers: StatMultipliers::from_percents(115, 105, 90, 100),
        growth: EnneagramType::Seven,
        stress: EnneagramType::Four,
        empowered: effect(
            "Joyful Crusade",
            StatAxis::Spirit,
            2,
            "Growth toward 7 loosens the Paladin's grip; they fight with delight instead of duty.",
        ),
        stressed: effect(
            "Brittle Judgment",
            StatAxis::Willpower,
            -2,
            "Stress toward 4 turns criticism inward into brooding resentment.",
        ),
    },
    TypeProfile {
        name: "Helper",
        class_name: "Cleric",
        class_description: "A devoted healer whose power flows from being needed.",
        multipliers: StatMultipliers::from_percents(100, 90, 120, 100),
        growth: EnneagramType::Four,
        stress: EnneagramType::Eight,
        empowered: effect(
            "Honest Heart",
            StatAxis::Willpower,
            2,
            "Growth toward 4 lets the Cleric name their own needs, steadying every blessing.",
        ),
        stressed: effect(
            "Wrathful Devotion",
            StatAxis::Spirit,
            -2,
            "Stress toward 8 twists care into control and open confrontation.",
        ),
    },
    TypeProfile {
        name: "Achiever",
        class_name: "Champion",
        class_description: "A gifted performer of victory who shines brightest before an audience.",
        multipliers: StatMultipliers::from_percents(110, 100, 95, 110),
        growth: EnneagramType::Six,
        stress: EnneagramType::Nine,
        empowered: effect(
            "Loyal Banner",
            StatAxis::Spirit,
            2,
            "Growth toward 6 aims the Champion's drive at the good of the whole party.",
        ),
        stressed: effect(
            "Hollow Victory",
            StatAxis::Willpower,
            -2,
            "Stress toward 9 drains ambition into numb disengagement.",
        ),
    },
    TypeProfile {
        name: "Individualist",
        class_name: "Bard",
        class_description: "A wandering artist who turns longing and identity into power.",
        multipliers: StatMultipliers::from_percents(90, 100, 125, 95),
        growth: EnneagramType::One,
        stress: EnneagramType::Two,
        empowered: effect(
            "Principled Muse",
            StatAxis::Willpower,
            2,
            "Growth toward 1 gives the Bard's feeling a disciplined form.",
        ),
        stressed: effect(
            "Clinging Refrain",
            StatAxis::Intelligence,
            -2,
            "Stress toward 2 sends the Bard chasing reassurance at any cost.",
        ),
    },
    TypeProfile {
        name: "Investigator",
        class_name: "Arcanist",
        class_description: "A withdrawn scholar who masters hidden systems before acting.",
        multipliers: StatMultipliers::from_percents(90, 125, 100, 85),
        growth: EnneagramType::Eight,
        stress: EnneagramType::Seven,
        empowered: effect(
            "Decisive Insight",
            StatAxis::Willpower,
            2,
            "Growth toward 8 turns hoarded knowledge into bold, embodied action.",
        ),
        stressed: effect(
            "Scattered Mind",
            StatAxis::Intelligence,
            -2,
            "Stress toward 7 fractures focus into restless distraction.",
        ),
    },
    TypeProfile {
        name: "Loyalist",
        class_name: "Sentinel",
        class_description: "A vigilant guardian who anticipates every threat to the group.",
        multipliers: StatMultipliers::from_percents(100, 110, 95, 110),
        growth: EnneagramType::Nine,
        stress: EnneagramType::Three,
        empowered: effect(
            "Steady Watch",
            StatAxis::Vitality,
            2,
            "Growth toward 9 quiets suspicion into calm, grounded vigilance.",
        ),
        stressed: effect(
            "Frantic Vanguard",
            StatAxis::Spirit,
            -2,
            "Stress toward 3 drives the Sentinel to overwork and prove their worth.",
        ),
    },
    TypeProfile {
        name: "Enthusiast",
        class_name: "Ranger",
        class_description: "A restless adventurer chasing the next horizon and the next thrill.",
        multipliers: StatMultipliers::from_percents(95, 105, 105, 115),
        growth: EnneagramType::Five,
        stress: EnneagramType::One,
        empowered: effect(
            "Deep Focus",
            StatAxis::Intelligence,
            2,
            "Growth toward 5 lets the Ranger stay on one trail long enough to master it.",
        ),
        stressed: effect(
            "Rigid Demand",
            StatAxis::Vitality,
            -2,
            "Stress toward 1 hardens play into impatience and criticism.",
        ),
    },
    TypeProfile {
        name: "Challenger",
        class_name: "Warlord",
        class_description: "An unyielding commander who meets force with greater force.",
        multipliers: StatMultipliers::from_percents(125, 90, 95, 110),
        growth: EnneagramType::Two,
        stress: EnneagramType::Five,
        empowered: effect(
            "Protector's Mercy",
            StatAxis::Spirit,
            2,
            "Growth toward 2 opens the Warlord's strength toward care for others.",
        ),
        stressed: effect(
            "Walled Fortress",
            StatAxis::Vitality,
            -2,
            "Stress toward 5 pulls the Warlord into guarded isolation.",
        ),
    },
    TypeProfile {
        name: "Peacemaker",
        class_name: "Druid",
        class_description: "A serene keeper of balance who merges with the world around them.",
        multipliers: StatMultipliers::from_percents(100, 95, 110, 105),
        growth: EnneagramType::Three,
        stress: EnneagramType::Six,
        empowered: effect(
            "Awakened Purpose",
            StatAxis::Willpower,
            2,
            "Growth toward 3 wakes the Druid into focused, self-directed action.",
        ),
        stressed: effect(
            "Anxious Grove",
            StatAxis::Intelligence,
            -2,
            "Stress toward 6 stirs worry and second-guessing beneath the calm.",
        ),
    },
];

// [lower wing, higher wing] per type.
static WING_FLAVORS: [[WingFlavor; 2]; 9] = [
    [
        wing("The Idealist", "tempers zeal with calm detachment"),
        wing("The Advocate", "channels principle into helping others"),
    ],
    [
        wing("The Servant", "serves from duty rather than applause"),
        wing("The Host", "wraps generosity in charm and warmth"),
    ],
    [
        wing("The Charmer", "wins through likability and attention to others"),
        wing("The Professional", "pursues excellence with private intensity"),
    ],
    [
        wing("The Aristocrat", "expresses identity with flair and ambition"),
        wing("The Bohemian", "retreats inward toward strange, original visions"),
    ],
    [
        wing("The Iconoclast", "pairs knowledge with an artist's eye"),
        wing("The Problem Solver", "applies knowledge to practical defense"),
    ],
    [
        wing("The Defender", "guards through study and preparation"),
        wing("The Buddy", "guards through humor and companionship"),
    ],
    [
        wing("The Entertainer", "seeks adventure alongside trusted friends"),
        wing("The Realist", "seizes experiences with blunt assertiveness"),
    ],
    [
        wing("The Maverick", "leads with restless, expansive energy"),
        wing("The Bear", "leads with patient, immovable strength"),
    ],
    [
        wing("The Referee", "keeps the peace with a firm hand when needed"),
        wing("The Dreamer", "keeps the peace through quiet ideals"),
    ],
];

// [sp, so, sx] per type.
static INSTINCT_PASSIVES: [[TraitSpec; 3]; 9] = [
    [
        passive("Orderly Provisions", "Keeps supplies perfectly maintained; never caught unprepared."),
        passive("Example of Virtue", "Allies who follow the Paladin's lead resist fear more easily."),
        passive("Zealous Reform", "Strikes harder against foes who break their word."),
    ],
    [
        passive("Quiet Service", "Heals allies without drawing enemy attention."),
        passive("Beloved Ally", "Grants a small morale boost to every ally in range."),
        passive("Devoted Bond", "Shares damage taken by one chosen companion."),
    ],
    [
        passive("Self-Made Grit", "Recovers faster after failing an objective."),
        passive("Renown", "Enemies hesitate before engaging a famous foe."),
        passive("Magnetic Image", "Draws enemy focus, shielding weaker allies."),
    ],
    [
        passive("Stoic Sorrow", "Gains resolve while below half health."),
        passive("Outsider's Lament", "Stronger when fighting apart from the group."),
        passive("Burning Envy", "Grows stronger against the most powerful enemy present."),
    ],
    [
        passive("Hidden Sanctum", "Rests in half the usual time when undisturbed."),
        passive("Keeper of Lore", "Reveals an enemy weakness at the start of combat."),
        passive("Secret Confidant", "Shares one hidden insight with a single trusted ally."),
    ],
    [
        passive("Warm Shelter", "Allies resting nearby recover additional vitality."),
        passive("Sworn Duty", "Cannot be forced to abandon an assigned post."),
        passive("Defiant Strength", "Meets intimidation with a counterattack."),
    ],
    [
        passive("Trusted Network", "Always knows someone who can supply what is missing."),
        passive("Sacrificial Cheer", "Absorbs party fatigue to keep spirits high."),
        passive("Fascination", "Gains momentum each time a new foe enters the fight."),
    ],
    [
        passive("Fortified Holdings", "Defends claimed ground with bonus resilience."),
        passive("Guardian of the Weak", "Intercepts attacks aimed at vulnerable allies."),
        passive("Possessive Claim", "Marks one foe; damage against it cannot be reduced."),
    ],
    [
        passive("Creature Comforts", "Stays calm and steady while well rested."),
        passive("Harmonizer", "Reduces friction and infighting within the party."),
        passive("Merged Spirit", "Mirrors the strongest stat of a bonded ally."),
    ],
];

impl EnneagramType {
    pub const COUNT: usize = 9;

    pub const fn all() -> [EnneagramType; Self::COUNT] {
        use EnneagramType::*;
        [One, Two, Three, Four, Five, Six, Seven, Eight, Nine]
    }

    /// Type number (1..=9).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based table index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize - 1
    }

    pub const fn from_number(number: u8) -> Option<EnneagramType> {
        match number {
            1..=9 => Some(Self::all()[number as usize - 1]),
            _ => None,
        }
    }

    /// Static profile for this type.
    #[inline]
    pub fn profile(self) -> &'static TypeProfile {
        &TYPE_PROFILES[self.as_index()]
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub const fn center(self) -> Center {
        match self {
            EnneagramType::Eight | EnneagramType::Nine | EnneagramType::One => Center::Gut,
            EnneagramType::Two | EnneagramType::Three | EnneagramType::Four => Center::Heart,
            EnneagramType::Five | EnneagramType::Six | EnneagramType::Seven => Center::Head,
        }
    }

    /// Adjacent types on the circle: `[lower, higher]` (1 wraps to 9 and back).
    pub const fn wings(self) -> [EnneagramType; 2] {
        let n = self.number();
        let lower = if n == 1 { 9 } else { n - 1 };
        let higher = if n == 9 { 1 } else { n + 1 };
        let all = Self::all();
        [all[lower as usize - 1], all[higher as usize - 1]]
    }

    pub fn is_valid_wing(self, wing: EnneagramType) -> bool {
        self.wings().contains(&wing)
    }

    /// Flavor for a wing, or `None` if `wing` is not adjacent to this type.
    pub fn wing_flavor(self, wing: EnneagramType) -> Option<&'static WingFlavor> {
        let wings = self.wings();
        let flavors = &WING_FLAVORS[self.as_index()];
        if wing == wings[0] {
            Some(&flavors[0])
        } else if wing == wings[1] {
            Some(&flavors[1])
        } else {
            None
        }
    }

    /// Passive granted by this type under an instinctual variant.
    pub fn instinct_passive(self, instinct: Instinct) -> &'static TraitSpec {
        &INSTINCT_PASSIVES[self.as_index()][instinct.as_index()]
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or(InputError::UnknownEnneagramType(value))
    }
}

impl From<EnneagramType> for u8 {
    fn from(value: EnneagramType) -> Self {
        value.number()
    }
}

/// Types that share a center with nothing else: the three members of `center`.
pub const fn types_in_center(center: Center) -> [EnneagramType; 3] {
    center.types()
}

/// Returns true if the core and both fixes come from three different centers.
pub fn is_valid_tritype(core: EnneagramType, tritype: &Tritype<EnneagramType>) -> bool {
    let [a, b, c] = tritype.with_core(core).map(EnneagramType::center);
    a != b && a != c && b != c
}
