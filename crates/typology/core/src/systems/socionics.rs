//! Socionics types, quadras, clubs and their elemental affinity.
//!
//! Each type belongs to one quadra (shared values) and one club (shared
//! interests). The pair (quadra, club) picks out exactly two types and exactly
//! one element, so an element also determines its quadra and club.

use super::mbti::Pole;

/// The four quadras.
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
pub enum Quadra {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl Quadra {
    pub const COUNT: usize = 4;

    pub const fn all() -> [Quadra; Self::COUNT] {
        [Quadra::Alpha, Quadra::Beta, Quadra::Gamma, Quadra::Delta]
    }

    pub const fn values(self) -> &'static str {
        match self {
            Quadra::Alpha => "Open curiosity, shared enjoyment and playful discovery.",
            Quadra::Beta => "Collective purpose, loyalty to the cause and decisive hierarchy.",
            Quadra::Gamma => "Personal ambition, frank truth and individual results.",
            Quadra::Delta => "Steady craft, practical care and long-term wellbeing.",
        }
    }
}

/// The four clubs (S/N combined with T/F).
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
pub enum Club {
    /// NT
    Researcher,
    /// SF
    Social,
    /// NF
    Humanitarian,
    /// ST
    Pragmatist,
}

/// Passive granted by club membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClubPassive {
    pub name: &'static str,
    pub description: &'static str,
}

impl Club {
    pub const COUNT: usize = 4;

    pub const fn all() -> [Club; Self::COUNT] {
        [
            Club::Researcher,
            Club::Social,
            Club::Humanitarian,
            Club::Pragmatist,
        ]
    }

    pub const fn from_poles(perception: Pole, judgment: Pole) -> Option<Club> {
        match (perception, judgment) {
            (Pole::N, Pole::T) => Some(Club::Researcher),
            (Pole::S, Pole::F) => Some(Club::Social),
            (Pole::N, Pole::F) => Some(Club::Humanitarian),
            (Pole::S, Pole::T) => Some(Club::Pragmatist),
            _ => None,
        }
    }

    /// The (perception, judgment) poles shared by the club.
    pub const fn poles(self) -> (Pole, Pole) {
        match self {
            Club::Researcher => (Pole::N, Pole::T),
            Club::Social => (Pole::S, Pole::F),
            Club::Humanitarian => (Pole::N, Pole::F),
            Club::Pragmatist => (Pole::S, Pole::T),
        }
    }

    pub const fn passive(self) -> ClubPassive {
        match self {
            Club::Researcher => ClubPassive {
                name: "Researcher's Insight",
                description: "After an unknown enemy acts once, one of its weaknesses is revealed.",
            },
            Club::Social => ClubPassive {
                name: "Hearth Bond",
                description: "Allies who rest alongside this character recover extra vitality.",
            },
            Club::Humanitarian => ClubPassive {
                name: "Empathic Resonance",
                description: "Senses hostile intent; ambushes never catch this character unaware.",
            },
            Club::Pragmatist => ClubPassive {
                name: "Field Expertise",
                description: "Equipment lasts longer and field repairs take half the time.",
            },
        }
    }
}

/// The eight elements, one per (quadra, club) pair.
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
pub enum Element {
    Air,
    Light,
    Shadow,
    Fire,
    Lightning,
    Ice,
    Earth,
    Water,
}

impl Element {
    pub const COUNT: usize = 8;

    pub const fn all() -> [Element; Self::COUNT] {
        use Element::*;
        [Air, Light, Shadow, Fire, Lightning, Ice, Earth, Water]
    }

    pub const fn quadra(self) -> Quadra {
        match self {
            Element::Air | Element::Light => Quadra::Alpha,
            Element::Shadow | Element::Fire => Quadra::Beta,
            Element::Lightning | Element::Ice => Quadra::Gamma,
            Element::Earth | Element::Water => Quadra::Delta,
        }
    }

    pub const fn club(self) -> Club {
        match self {
            Element::Air | Element::Lightning => Club::Researcher,
            Element::Light | Element::Ice => Club::Social,
            Element::Shadow | Element::Water => Club::Humanitarian,
            Element::Fire | Element::Earth => Club::Pragmatist,
        }
    }

    /// Inverse of `(quadra(), club())`. Returns `None` for pairs no type occupies.
    pub const fn from_parts(quadra: Quadra, club: Club) -> Option<Element> {
        match (quadra, club) {
            (Quadra::Alpha, Club::Researcher) => Some(Element::Air),
            (Quadra::Alpha, Club::Social) => Some(Element::Light),
            (Quadra::Beta, Club::Humanitarian) => Some(Element::Shadow),
            (Quadra::Beta, Club::Pragmatist) => Some(Element::Fire),
            (Quadra::Gamma, Club::Researcher) => Some(Element::Lightning),
            (Quadra::Gamma, Club::Social) => Some(Element::Ice),
            (Quadra::Delta, Club::Pragmatist) => Some(Element::Earth),
            (Quadra::Delta, Club::Humanitarian) => Some(Element::Water),
            _ => None,
        }
    }

    /// Epithet used in generated titles.
    pub const fn epithet(self) -> &'static str {
        match self {
            Element::Air => "Windborne",
            Element::Light => "Radiant",
            Element::Shadow => "Umbral",
            Element::Fire => "Emberforged",
            Element::Lightning => "Stormcalled",
            Element::Ice => "Frostbound",
            Element::Earth => "Stoneheart",
            Element::Water => "Tidewoven",
        }
    }
}

/// The sixteen socionics types.
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
pub enum SocionicsType {
    ILE,
    SEI,
    ESE,
    LII,
    EIE,
    LSI,
    SLE,
    IEI,
    SEE,
    ILI,
    LIE,
    ESI,
    LSE,
    EII,
    IEE,
    SLI,
}

impl SocionicsType {
    pub const COUNT: usize = 16;

    /// All types, grouped by quadra.
    pub const fn all() -> [SocionicsType; Self::COUNT] {
        use SocionicsType::*;
        [
            ILE, SEI, ESE, LII, EIE, LSI, SLE, IEI, SEE, ILI, LIE, ESI, LSE, EII, IEE, SLI,
        ]
    }

    pub const fn quadra(self) -> Quadra {
        use SocionicsType::*;
        match self {
            ILE | SEI | ESE | LII => Quadra::Alpha,
            EIE | LSI | SLE | IEI => Quadra::Beta,
            SEE | ILI | LIE | ESI => Quadra::Gamma,
            LSE | EII | IEE | SLI => Quadra::Delta,
        }
    }

    pub const fn club(self) -> Club {
        use SocionicsType::*;
        match self {
            ILE | LII | ILI | LIE => Club::Researcher,
            SEI | ESE | SEE | ESI => Club::Social,
            EIE | IEI | EII | IEE => Club::Humanitarian,
            LSI | SLE | LSE | SLI => Club::Pragmatist,
        }
    }

    pub const fn is_extraverted(self) -> bool {
        use SocionicsType::*;
        matches!(self, ILE | ESE | EIE | SLE | SEE | LIE | LSE | IEE)
    }

    /// Rational types lead with a judging function (lowercase `j`).
    pub const fn is_rational(self) -> bool {
        use SocionicsType::*;
        matches!(self, ESE | LII | EIE | LSI | LIE | ESI | LSE | EII)
    }

    pub const fn element(self) -> Element {
        use SocionicsType::*;
        match self {
            ILE | LII => Element::Air,
            SEI | ESE => Element::Light,
            EIE | IEI => Element::Shadow,
            LSI | SLE => Element::Fire,
            ILI | LIE => Element::Lightning,
            SEE | ESI => Element::Ice,
            LSE | SLI => Element::Earth,
            EII | IEE => Element::Water,
        }
    }

    /// Dichotomy poles in E/I, S/N, T/F, J/P order.
    pub const fn poles(self) -> [Pole; 4] {
        let (perception, judgment) = self.club().poles();
        [
            if self.is_extraverted() { Pole::E } else { Pole::I },
            perception,
            judgment,
            if self.is_rational() { Pole::J } else { Pole::P },
        ]
    }

    /// Four-letter code with a lowercase last letter, e.g. `INTp`.
    pub fn code(self) -> String {
        let [energy, perception, judgment, lifestyle] = self.poles();
        format!(
            "{energy}{perception}{judgment}{}",
            lifestyle.as_ref().to_ascii_lowercase()
        )
    }

    pub const fn alias(self) -> &'static str {
        use SocionicsType::*;
        match self {
            ILE => "Inventor",
            SEI => "Mediator",
            ESE => "Enthusiast",
            LII => "Analyst",
            EIE => "Mentor",
            LSI => "Inspector",
            SLE => "Marshal",
            IEI => "Lyricist",
            SEE => "Politician",
            ILI => "Critic",
            LIE => "Entrepreneur",
            ESI => "Guardian",
            LSE => "Administrator",
            EII => "Humanist",
            IEE => "Psychologist",
            SLI => "Craftsman",
        }
    }

    pub fn from_poles(poles: [Pole; 4]) -> Option<SocionicsType> {
        Self::all().into_iter().find(|ty| ty.poles() == poles)
    }

    /// The quadra member with the given extraversion and rationality.
    pub fn from_quadra(quadra: Quadra, extraverted: bool, rational: bool) -> SocionicsType {
        let members = types_in_quadra(quadra);
        members
            .into_iter()
            .find(|ty| ty.is_extraverted() == extraverted && ty.is_rational() == rational)
            .unwrap_or(members[0])
    }
}

/// The four members of a quadra, in enumeration order.
pub fn types_in_quadra(quadra: Quadra) -> [SocionicsType; 4] {
    let all = SocionicsType::all();
    let start = match quadra {
        Quadra::Alpha => 0,
        Quadra::Beta => 4,
        Quadra::Gamma => 8,
        Quadra::Delta => 12,
    };
    [all[start], all[start + 1], all[start + 2], all[start + 3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_mapping_is_a_bijection() {
        for ty in SocionicsType::all() {
            assert_eq!(Element::from_parts(ty.quadra(), ty.club()), Some(ty.element()));
        }
        for element in Element::all() {
            assert_eq!(
                Element::from_parts(element.quadra(), element.club()),
                Some(element)
            );
            let holders = SocionicsType::all()
                .into_iter()
                .filter(|ty| ty.element() == element)
                .count();
            assert_eq!(holders, 2, "{element} must belong to exactly two types");
        }
        assert_eq!(Element::from_parts(Quadra::Alpha, Club::Pragmatist), None);
    }

    #[test]
    fn codes_follow_dichotomies() {
        assert_eq!(SocionicsType::ILE.code(), "ENTp");
        assert_eq!(SocionicsType::LII.code(), "INTj");
        assert_eq!(SocionicsType::ESI.code(), "ISFj");
        assert_eq!(SocionicsType::SLI.code(), "ISTp");
        assert_eq!(SocionicsType::ILI.element(), Element::Lightning);
    }

    #[test]
    fn quadra_members_cover_every_attitude_pair() {
        for quadra in Quadra::all() {
            for extraverted in [true, false] {
                for rational in [true, false] {
                    let ty = SocionicsType::from_quadra(quadra, extraverted, rational);
                    assert_eq!(ty.quadra(), quadra);
                    assert_eq!(ty.is_extraverted(), extraverted);
                    assert_eq!(ty.is_rational(), rational);
                }
            }
        }
    }

    #[test]
    fn poles_identify_a_unique_type() {
        for ty in SocionicsType::all() {
            assert_eq!(SocionicsType::from_poles(ty.poles()), Some(ty));
        }
    }
}
