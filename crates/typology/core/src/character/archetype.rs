//! Archetype builder.
//!
//! The archetype is the character class derived from the Enneagram selection:
//! class identity, stat multiplier template, empowered/stressed status effects
//! and instinct-derived passives. With a tritype, the multipliers of all three
//! contributing types are blended and every step is recorded.

use arrayvec::ArrayVec;

use crate::config::EngineConfig;
use crate::error::InputError;
use crate::stats::{StatAxis, StatMultipliers};
use crate::systems::enneagram::EffectSpec;
use crate::systems::{Club, EnneagramType, Instinct, InstinctRealm, Tritype};

/// Bounded passive list carried by archetypes and combat behaviors.
pub type PassiveList = ArrayVec<PassiveTrait, { EngineConfig::MAX_PASSIVES }>;

/// Ordered tritype blend steps (core, second fix, third fix).
pub type BlendSteps = ArrayVec<StatBlendStep, { EngineConfig::TRITYPE_STEPS }>;

/// Enneagram part of a generator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnneagramSelection {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub core: EnneagramType,
    pub wing: EnneagramType,
    /// Primary instinctual variant.
    pub instinct: Instinct,
    /// Secondary instinctual variant; must differ from the primary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub instinct_stack: Option<Instinct>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tritype: Option<Tritype<EnneagramType>>,
}

impl EnneagramSelection {
    pub const fn new(core: EnneagramType, wing: EnneagramType, instinct: Instinct) -> Self {
        Self {
            core,
            wing,
            instinct,
            instinct_stack: None,
            tritype: None,
        }
    }

    #[must_use]
    pub const fn with_stack(mut self, secondary: Instinct) -> Self {
        self.instinct_stack = Some(secondary);
        self
    }

    #[must_use]
    pub const fn with_tritype(mut self, second: EnneagramType, third: EnneagramType) -> Self {
        self.tritype = Some(Tritype::new(second, third));
        self
    }

    /// Checks wing adjacency, instinct stack distinctness and tritype centers.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.core.is_valid_wing(self.wing) {
            return Err(InputError::InvalidWing {
                core: self.core,
                wing: self.wing,
            });
        }

        if self.instinct_stack == Some(self.instinct) {
            return Err(InputError::DuplicateInstinct(self.instinct));
        }

        if let Some(tritype) = &self.tritype {
            let core_center = self.core.center();
            for fix in [tritype.second, tritype.third] {
                if fix.center() == core_center {
                    return Err(InputError::TritypeCoreCenter {
                        core: self.core,
                        fix,
                    });
                }
            }
            if tritype.second.center() == tritype.third.center() {
                return Err(InputError::TritypeRepeatedCenter {
                    second: tritype.second,
                    third: tritype.third,
                });
            }
        }

        Ok(())
    }
}

/// Whether a status effect comes from the growth or the stress line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    Empowered,
    Stressed,
}

/// A named stat shift the character enters under growth or stress.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: EffectKind,
    pub name: String,
    pub description: String,
    pub axis: StatAxis,
    /// Signed change applied to `axis` while the effect is active.
    pub amount: i32,
}

impl StatusEffect {
    pub fn from_spec(kind: EffectKind, spec: &EffectSpec) -> Self {
        Self {
            kind,
            name: spec.name.to_owned(),
            description: spec.description.to_owned(),
            axis: spec.axis,
            amount: spec.amount,
        }
    }
}

/// What granted a passive trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassiveSource {
    /// An Enneagram type under an instinctual variant.
    Instinct {
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        ty: EnneagramType,
        instinct: Instinct,
    },
    /// An instinct realm.
    Realm(InstinctRealm),
    /// A socionics club.
    Club(Club),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveTrait {
    pub name: String,
    pub description: String,
    pub source: PassiveSource,
}

impl PassiveTrait {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: PassiveSource,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source,
        }
    }

    /// Passive granted by `ty` under `instinct`.
    pub fn from_instinct(ty: EnneagramType, instinct: Instinct) -> Self {
        let spec = ty.instinct_passive(instinct);
        Self::new(
            spec.name,
            spec.description,
            PassiveSource::Instinct { ty, instinct },
        )
    }
}

/// Position of a contributing type inside a tritype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BlendPosition {
    Core,
    SecondFix,
    ThirdFix,
}

impl BlendPosition {
    pub const fn all() -> [BlendPosition; 3] {
        [
            BlendPosition::Core,
            BlendPosition::SecondFix,
            BlendPosition::ThirdFix,
        ]
    }

    pub const fn weight(self) -> i32 {
        EngineConfig::TRITYPE_WEIGHTS[self as usize]
    }
}

/// One contribution to a blended multiplier set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlendStep {
    pub source: EnneagramType,
    pub position: BlendPosition,
    pub weight: i32,
    /// The source type's own multiplier template.
    pub multipliers: StatMultipliers,
    /// `weight * percent` per axis.
    pub weighted: [i32; StatAxis::COUNT],
}

impl StatBlendStep {
    pub fn new(source: EnneagramType, position: BlendPosition) -> Self {
        let weight = position.weight();
        let multipliers = source.profile().multipliers;
        let percents = *multipliers.percents();
        Self {
            source,
            position,
            weight,
            multipliers,
            weighted: percents.map(|percent| weight * percent),
        }
    }

    /// Display label, e.g. `"5 (core)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.source, self.position)
    }
}

/// Integration or disintegration line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineDescriptor {
    pub target: EnneagramType,
    pub target_class: String,
    pub description: String,
}

/// Wing-derived flavor. Wings shift description, never stats.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WingTrait {
    pub wing: EnneagramType,
    pub title: String,
    pub trait_shift: String,
}

/// The derived character class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub class_name: String,
    pub class_description: String,
    /// Core type, absent for the neutral archetype.
    pub enneagram_type: Option<EnneagramType>,
    pub wing: Option<WingTrait>,
    pub multipliers: StatMultipliers,
    pub empowered: StatusEffect,
    pub stressed: StatusEffect,
    pub passives: PassiveList,
    pub growth_line: Option<LineDescriptor>,
    pub stress_line: Option<LineDescriptor>,
    /// Present only when a tritype was blended.
    pub blend_steps: Option<BlendSteps>,
}

impl Archetype {
    /// Label recorded as the multiplier source in a stat breakdown.
    pub fn multiplier_source(&self) -> String {
        match (&self.enneagram_type, &self.blend_steps) {
            (Some(_), Some(steps)) => {
                let types: Vec<String> = steps.iter().map(|step| step.source.to_string()).collect();
                format!("{} tritype {}", self.class_name, types.join("-"))
            }
            (Some(ty), None) => format!("{} (type {ty})", self.class_name),
            (None, _) => "neutral".to_owned(),
        }
    }
}

fn line(target: EnneagramType, effect: &EffectSpec) -> LineDescriptor {
    LineDescriptor {
        target,
        target_class: target.profile().class_name.to_owned(),
        description: effect.description.to_owned(),
    }
}

/// Every passive the selection grants, in order: primary instinct, stacked
/// instinct, then the second and third tritype fixes under the primary instinct.
pub fn archetype_passive_list(selection: &EnneagramSelection) -> PassiveList {
    let instinct = selection.instinct;
    let stacked = selection
        .instinct_stack
        .map(|secondary| (selection.core, secondary));
    let fixes = selection
        .tritype
        .iter()
        .flat_map(|tritype| [(tritype.second, instinct), (tritype.third, instinct)]);
    let sources = core::iter::once((selection.core, instinct))
        .chain(stacked)
        .chain(fixes);

    let mut passives = PassiveList::new();
    for (ty, instinct) in sources {
        if passives
            .try_push(PassiveTrait::from_instinct(ty, instinct))
            .is_err()
        {
            tracing::warn!(%ty, %instinct, "archetype passive list is full");
        }
    }
    passives
}

fn build_core_archetype(selection: &EnneagramSelection) -> Archetype {
    let core = selection.core;
    let profile = core.profile();

    let wing = core.wing_flavor(selection.wing).map(|flavor| WingTrait {
        wing: selection.wing,
        title: flavor.title.to_owned(),
        trait_shift: flavor.trait_shift.to_owned(),
    });

    Archetype {
        class_name: profile.class_name.to_owned(),
        class_description: profile.class_description.to_owned(),
        enneagram_type: Some(core),
        wing,
        multipliers: profile.multipliers,
        empowered: StatusEffect::from_spec(EffectKind::Empowered, &profile.empowered),
        stressed: StatusEffect::from_spec(EffectKind::Stressed, &profile.stressed),
        passives: archetype_passive_list(selection),
        growth_line: Some(line(profile.growth, &profile.empowered)),
        stress_line: Some(line(profile.stress, &profile.stressed)),
        blend_steps: None,
    }
}

/// Builds the archetype for a selection, blending a tritype when present.
pub fn build_archetype(selection: &EnneagramSelection) -> Archetype {
    match &selection.tritype {
        Some(tritype) => build_tritype_archetype(selection, tritype),
        None => build_core_archetype(selection),
    }
}

/// Builds an archetype whose multipliers blend the core with two tritype fixes.
///
/// Blend steps are recorded in core, second fix, third fix order, and the
/// final percent per axis is `Σ weighted / Σ weight` (floor).
pub fn build_tritype_archetype(
    selection: &EnneagramSelection,
    tritype: &Tritype<EnneagramType>,
) -> Archetype {
    let selection = EnneagramSelection {
        tritype: Some(*tritype),
        ..*selection
    };
    let mut archetype = build_core_archetype(&selection);

    let steps: BlendSteps = tritype
        .with_core(selection.core)
        .into_iter()
        .zip(BlendPosition::all())
        .map(|(source, position)| StatBlendStep::new(source, position))
        .collect();

    archetype.multipliers = StatMultipliers::weighted_average(
        steps
            .iter()
            .map(|step| (step.weight, &step.multipliers)),
    );

    tracing::debug!(
        core = %selection.core,
        second = %tritype.second,
        third = %tritype.third,
        multipliers = ?archetype.multipliers.percents(),
        "blended tritype multipliers"
    );

    archetype.blend_steps = Some(steps);
    archetype
}

/// Archetype used when the Enneagram system is disabled.
pub fn neutral_archetype() -> Archetype {
    Archetype {
        class_name: "Wanderer".to_owned(),
        class_description: "An unaligned traveler whose path is not yet written.".to_owned(),
        enneagram_type: None,
        wing: None,
        multipliers: StatMultipliers::NEUTRAL,
        empowered: StatusEffect {
            kind: EffectKind::Empowered,
            name: "Open Road".to_owned(),
            description: "Nothing holds the Wanderer back when the way ahead is clear.".to_owned(),
            axis: StatAxis::Spirit,
            amount: 1,
        },
        stressed: StatusEffect {
            kind: EffectKind::Stressed,
            name: "Rootless".to_owned(),
            description: "Without a home to return to, hardship wears the Wanderer down."
                .to_owned(),
            axis: StatAxis::Spirit,
            amount: -1,
        },
        passives: PassiveList::new(),
        growth_line: None,
        stress_line: None,
        blend_steps: None,
    }
}
