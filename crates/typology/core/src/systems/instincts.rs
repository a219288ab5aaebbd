//! Expanded Instincts - nine realms across three centers.
//!
//! Each realm carries three independent triad classifications (activation,
//! positioning, regen source), a combat orientation and one passive. Within a
//! center the three realms take distinct values on every triad.

/// The three instinct centers.
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
pub enum InstinctCenter {
    Survival,
    Interpersonal,
    Purpose,
}

impl InstinctCenter {
    pub const COUNT: usize = 3;

    pub const fn all() -> [InstinctCenter; Self::COUNT] {
        [
            InstinctCenter::Survival,
            InstinctCenter::Interpersonal,
            InstinctCenter::Purpose,
        ]
    }

    pub const fn realms(self) -> [InstinctRealm; 3] {
        use InstinctRealm::*;
        match self {
            InstinctCenter::Survival => [Fortitude, Security, SelfMastery],
            InstinctCenter::Interpersonal => [Allyship, Cooperation, Belonging],
            InstinctCenter::Purpose => [Significance, Exploration, Union],
        }
    }

    pub const fn others(self) -> [InstinctCenter; 2] {
        match self {
            InstinctCenter::Survival => [InstinctCenter::Interpersonal, InstinctCenter::Purpose],
            InstinctCenter::Interpersonal => [InstinctCenter::Survival, InstinctCenter::Purpose],
            InstinctCenter::Purpose => [InstinctCenter::Survival, InstinctCenter::Interpersonal],
        }
    }
}

/// How a realm enters a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Activation {
    Proactive,
    Reactive,
    Steady,
}

/// Where a realm stands in formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Positioning {
    Vanguard,
    Flanker,
    Rearguard,
}

/// What restores a realm between fights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum RegenSource {
    Solitude,
    Connection,
    Pursuit,
}

/// The nine instinct realms, written as their two-letter codes.
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
pub enum InstinctRealm {
    #[cfg_attr(feature = "serde", serde(rename = "FD"))]
    #[strum(to_string = "FD", serialize = "fortitude")]
    Fortitude,
    #[cfg_attr(feature = "serde", serde(rename = "SY"))]
    #[strum(to_string = "SY", serialize = "security")]
    Security,
    #[cfg_attr(feature = "serde", serde(rename = "SM"))]
    #[strum(to_string = "SM", serialize = "self_mastery")]
    SelfMastery,
    #[cfg_attr(feature = "serde", serde(rename = "AY"))]
    #[strum(to_string = "AY", serialize = "allyship")]
    Allyship,
    #[cfg_attr(feature = "serde", serde(rename = "CY"))]
    #[strum(to_string = "CY", serialize = "cooperation")]
    Cooperation,
    #[cfg_attr(feature = "serde", serde(rename = "BG"))]
    #[strum(to_string = "BG", serialize = "belonging")]
    Belonging,
    #[cfg_attr(feature = "serde", serde(rename = "SS"))]
    #[strum(to_string = "SS", serialize = "significance")]
    Significance,
    #[cfg_attr(feature = "serde", serde(rename = "EX"))]
    #[strum(to_string = "EX", serialize = "exploration")]
    Exploration,
    #[cfg_attr(feature = "serde", serde(rename = "UN"))]
    #[strum(to_string = "UN", serialize = "union")]
    Union,
}

/// Static profile of one realm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RealmProfile {
    pub name: &'static str,
    pub orientation: &'static str,
    pub activation: Activation,
    pub positioning: Positioning,
    pub regen: RegenSource,
    pub passive_name: &'static str,
    pub passive_description: &'static str,
}

static REALM_PROFILES: [RealmProfile; 9] = [
    RealmProfile {
        name: "Fortitude",
        orientation: "Bulwark",
        activation: Activation::Proactive,
        positioning: Positioning::Vanguard,
        regen: RegenSource::Solitude,
        passive_name: "Unbroken",
        passive_description: "Shrugs off the first crippling blow of every encounter.",
    },
    RealmProfile {
        name: "Security",
        orientation: "Quartermaster",
        activation: Activation::Steady,
        positioning: Positioning::Rearguard,
        regen: RegenSource::Connection,
        passive_name: "Stockpile",
        passive_description: "Carries one extra consumable that replenishes after each rest.",
    },
    RealmProfile {
        name: "Self-Mastery",
        orientation: "Iron Monk",
        activation: Activation::Reactive,
        positioning: Positioning::Flanker,
        regen: RegenSource::Pursuit,
        passive_name: "Disciplined Form",
        passive_description: "Cannot be knocked off balance while focusing on a technique.",
    },
    RealmProfile {
        name: "Allyship",
        orientation: "Bondguard",
        activation: Activation::Reactive,
        positioning: Positioning::Vanguard,
        regen: RegenSource::Connection,
        passive_name: "Sworn Shield",
        passive_description: "Steps in to take the hit when a bonded ally is struck.",
    },
    RealmProfile {
        name: "Cooperation",
        orientation: "Tactician",
        activation: Activation::Proactive,
        positioning: Positioning::Rearguard,
        regen: RegenSource::Pursuit,
        passive_name: "Coordinated Plan",
        passive_description: "Allies acting on this character's call gain a bonus to hit.",
    },
    RealmProfile {
        name: "Belonging",
        orientation: "Banner-Bearer",
        activation: Activation::Steady,
        positioning: Positioning::Flanker,
        regen: RegenSource::Solitude,
        passive_name: "Common Colors",
        passive_description: "The party resists fear while the banner is raised.",
    },
    RealmProfile {
        name: "Significance",
        orientation: "Zealot",
        activation: Activation::Steady,
        positioning: Positioning::Vanguard,
        regen: RegenSource::Pursuit,
        passive_name: "Legacy Drive",
        passive_description: "Gains power when the stakes of a fight are high.",
    },
    RealmProfile {
        name: "Exploration",
        orientation: "Pathfinder",
        activation: Activation::Reactive,
        positioning: Positioning::Rearguard,
        regen: RegenSource::Solitude,
        passive_name: "Uncharted Step",
        passive_description: "Moves freely through difficult terrain and finds hidden routes.",
    },
    RealmProfile {
        name: "Union",
        orientation: "Soulbinder",
        activation: Activation::Proactive,
        positioning: Positioning::Flanker,
        regen: RegenSource::Connection,
        passive_name: "Kindred Link",
        passive_description: "Shares a portion of healing received with one linked ally.",
    },
];

impl InstinctRealm {
    pub const COUNT: usize = 9;

    pub const fn all() -> [InstinctRealm; Self::COUNT] {
        use InstinctRealm::*;
        [
            Fortitude,
            Security,
            SelfMastery,
            Allyship,
            Cooperation,
            Belonging,
            Significance,
            Exploration,
            Union,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    pub fn profile(self) -> &'static RealmProfile {
        &REALM_PROFILES[self.as_index()]
    }

    pub const fn center(self) -> InstinctCenter {
        use InstinctRealm::*;
        match self {
            Fortitude | Security | SelfMastery => InstinctCenter::Survival,
            Allyship | Cooperation | Belonging => InstinctCenter::Interpersonal,
            Significance | Exploration | Union => InstinctCenter::Purpose,
        }
    }
}

/// The three realms of a center.
pub const fn realms_in_center(center: InstinctCenter) -> [InstinctRealm; 3] {
    center.realms()
}

/// Returns true if the core realm and both fixes come from three different centers.
pub fn is_valid_realm_tritype(core: InstinctRealm, tritype: &super::Tritype<InstinctRealm>) -> bool {
    let [a, b, c] = tritype.with_core(core).map(InstinctRealm::center);
    a != b && a != c && b != c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::Tritype;

    #[test]
    fn triads_are_distinct_within_each_center() {
        for center in InstinctCenter::all() {
            let profiles = realms_in_center(center).map(|realm| realm.profile());
            for (i, a) in profiles.iter().enumerate() {
                for b in profiles.iter().skip(i + 1) {
                    assert_ne!(a.activation, b.activation);
                    assert_ne!(a.positioning, b.positioning);
                    assert_ne!(a.regen, b.regen);
                }
            }
        }
    }

    #[test]
    fn realms_belong_to_their_center() {
        for realm in InstinctRealm::all() {
            assert!(realms_in_center(realm.center()).contains(&realm));
        }
    }

    #[test]
    fn codes_parse() {
        assert_eq!("FD".parse::<InstinctRealm>().unwrap(), InstinctRealm::Fortitude);
        assert_eq!("un".parse::<InstinctRealm>().unwrap(), InstinctRealm::Union);
        assert_eq!(InstinctRealm::SelfMastery.to_string(), "SM");
        assert_eq!(InstinctRealm::Belonging.profile().orientation, "Banner-Bearer");
    }

    #[test]
    fn realm_tritype_needs_three_centers() {
        let legal = Tritype::new(InstinctRealm::Allyship, InstinctRealm::Union);
        assert!(is_valid_realm_tritype(InstinctRealm::Fortitude, &legal));
        let repeated = Tritype::new(InstinctRealm::Security, InstinctRealm::Union);
        assert!(!is_valid_realm_tritype(InstinctRealm::Fortitude, &repeated));
    }
}
