//! Combat behavior builder.
//!
//! Orientation and the three triads come from the core realm alone. Passives
//! accumulate from the core realm and, with a tritype, from both fixes, each
//! tagged with its source realm. Without a realm the behavior takes the middle
//! entry of each triad and carries no passives.

use super::archetype::{PassiveList, PassiveSource, PassiveTrait};
use crate::error::InputError;
use crate::systems::{
    Activation, InstinctCenter, InstinctRealm, Positioning, RegenSource, Tritype,
};

/// Instinct part of a generator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstinctSelection {
    pub realm: InstinctRealm,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tritype: Option<Tritype<InstinctRealm>>,
}

impl InstinctSelection {
    pub const fn new(realm: InstinctRealm) -> Self {
        Self {
            realm,
            tritype: None,
        }
    }

    #[must_use]
    pub const fn with_tritype(mut self, second: InstinctRealm, third: InstinctRealm) -> Self {
        self.tritype = Some(Tritype::new(second, third));
        self
    }

    /// Checks that the realm tritype spans all three centers.
    pub fn validate(&self) -> Result<(), InputError> {
        let Some(tritype) = &self.tritype else {
            return Ok(());
        };

        let core_center = self.realm.center();
        for fix in [tritype.second, tritype.third] {
            if fix.center() == core_center {
                return Err(InputError::RealmTritypeCoreCenter {
                    core: self.realm,
                    fix,
                });
            }
        }
        if tritype.second.center() == tritype.third.center() {
            return Err(InputError::RealmTritypeRepeatedCenter {
                second: tritype.second,
                third: tritype.third,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatBehavior {
    /// `None` only in [`neutral_combat_behavior`].
    pub realm: Option<InstinctRealm>,
    pub center: Option<InstinctCenter>,
    pub orientation: String,
    pub activation: Activation,
    pub positioning: Positioning,
    pub regen: RegenSource,
    pub passives: PassiveList,
    pub tritype: Option<Tritype<InstinctRealm>>,
}

fn realm_passive(realm: InstinctRealm) -> PassiveTrait {
    let profile = realm.profile();
    PassiveTrait::new(
        profile.passive_name,
        profile.passive_description,
        PassiveSource::Realm(realm),
    )
}

pub fn build_combat_behavior(selection: &InstinctSelection) -> CombatBehavior {
    let realm = selection.realm;
    let profile = realm.profile();

    let realms = match &selection.tritype {
        Some(tritype) => tritype.with_core(realm).to_vec(),
        None => vec![realm],
    };
    let passives: PassiveList = realms.into_iter().map(realm_passive).collect();

    CombatBehavior {
        realm: Some(realm),
        center: Some(realm.center()),
        orientation: profile.orientation.to_owned(),
        activation: profile.activation,
        positioning: profile.positioning,
        regen: profile.regen,
        passives,
        tritype: selection.tritype,
    }
}

/// Behavior used when the instincts system is disabled.
pub fn neutral_combat_behavior() -> CombatBehavior {
    CombatBehavior {
        realm: None,
        center: None,
        orientation: "Drifter".to_owned(),
        activation: Activation::Reactive,
        positioning: Positioning::Flanker,
        regen: RegenSource::Connection,
        passives: PassiveList::new(),
        tritype: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_realm_sets_triads() {
        let behavior = build_combat_behavior(&InstinctSelection::new(InstinctRealm::Fortitude));
        assert_eq!(behavior.realm, Some(InstinctRealm::Fortitude));
        assert_eq!(behavior.center, Some(InstinctCenter::Survival));
        assert_eq!(behavior.orientation, "Bulwark");
        assert_eq!(behavior.activation, Activation::Proactive);
        assert_eq!(behavior.positioning, Positioning::Vanguard);
        assert_eq!(behavior.regen, RegenSource::Solitude);
        assert_eq!(behavior.passives.len(), 1);
    }

    #[test]
    fn tritype_adds_passives_but_not_triads() {
        let selection = InstinctSelection::new(InstinctRealm::Fortitude)
            .with_tritype(InstinctRealm::Cooperation, InstinctRealm::Exploration);
        assert!(selection.validate().is_ok());

        let behavior = build_combat_behavior(&selection);
        let sources: Vec<PassiveSource> = behavior.passives.iter().map(|p| p.source).collect();
        assert_eq!(
            sources,
            [
                PassiveSource::Realm(InstinctRealm::Fortitude),
                PassiveSource::Realm(InstinctRealm::Cooperation),
                PassiveSource::Realm(InstinctRealm::Exploration),
            ]
        );
        assert_eq!(behavior.activation, Activation::Proactive);
    }

    #[test]
    fn neutral_behavior_has_no_realm_or_passives() {
        let behavior = neutral_combat_behavior();
        assert_eq!(behavior.realm, None);
        assert_eq!(behavior.center, None);
        assert!(behavior.passives.is_empty());
        assert_eq!(behavior.activation, Activation::Reactive);
        assert_eq!(behavior.positioning, Positioning::Flanker);
        assert_eq!(behavior.regen, RegenSource::Connection);
    }

    #[test]
    fn realm_tritype_rejects_shared_centers() {
        let selection = InstinctSelection::new(InstinctRealm::Fortitude)
            .with_tritype(InstinctRealm::Security, InstinctRealm::Union);
        assert_eq!(
            selection.validate(),
            Err(InputError::RealmTritypeCoreCenter {
                core: InstinctRealm::Fortitude,
                fix: InstinctRealm::Security
            })
        );

        let selection = InstinctSelection::new(InstinctRealm::Fortitude)
            .with_tritype(InstinctRealm::Union, InstinctRealm::Exploration);
        assert!(matches!(
            selection.validate(),
            Err(InputError::RealmTritypeRepeatedCenter { .. })
        ));
    }
}
