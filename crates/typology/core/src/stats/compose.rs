//! Stat composition.
//!
//! ```text
//! [ Base (priority ordering or neutral) ]
//!      ↓  × multiplier percent (floor)
//! [ Multiplied ]
//!      ↓  override replaces the value, bypassing multiplication
//! [ Overridden ]
//!      ↓  clamp to [MIN_STAT, MAX_STAT]
//! [ Final ]
//! ```
//!
//! The breakdown keeps every input of this pipeline, so the displayed block
//! can always be recomputed from it.

use super::block::{StatAxis, StatBlock, StatOverrides, clamp_stat};
use super::multiplier::StatMultipliers;
use crate::systems::ApType;

/// Where the base block came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BaseSource {
    /// Position values of a cognitive-priority ordering.
    Attitudinal(ApType),
    /// Every axis at the neutral default.
    Neutral,
}

/// Provenance of a [`StatBlock`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBreakdown {
    pub base: StatBlock,
    pub base_source: BaseSource,
    pub multipliers: StatMultipliers,
    /// Label of whatever produced the multipliers (a class name, a tritype, "neutral").
    pub multiplier_source: String,
    pub overrides: StatOverrides,
}

impl StatBreakdown {
    /// Value of one axis after multiplication, before overrides and clamping.
    pub fn multiplied(&self, axis: StatAxis) -> i32 {
        self.multipliers.apply(axis, self.base.get(axis))
    }

    /// Final value of one axis.
    pub fn resolve(&self, axis: StatAxis) -> i32 {
        clamp_stat(
            self.overrides
                .get(axis)
                .unwrap_or_else(|| self.multiplied(axis)),
        )
    }

    /// Recomputes the final block from the recorded stages.
    pub fn recompose(&self) -> StatBlock {
        StatBlock::from_fn(|axis| self.resolve(axis))
    }

    /// Returns a copy whose overrides are layered with `overrides` (newer wins).
    #[must_use]
    pub fn with_overrides(&self, overrides: &StatOverrides) -> Self {
        Self {
            overrides: self.overrides.merged(overrides),
            ..self.clone()
        }
    }

    /// One-line explanation of an axis, e.g. `"willpower: 14 x 90% = 12"`.
    pub fn explain(&self, axis: StatAxis) -> String {
        let base = self.base.get(axis);
        let percent = self.multipliers.percent(axis);
        let multiplied = self.multiplied(axis);
        let resolved = self.resolve(axis);
        match self.overrides.get(axis) {
            Some(value) => format!(
                "{axis}: {base} x {percent}% = {multiplied}, overridden to {value} -> {resolved}"
            ),
            None if resolved != multiplied => {
                format!("{axis}: {base} x {percent}% = {multiplied}, clamped to {resolved}")
            }
            None => format!("{axis}: {base} x {percent}% = {resolved}"),
        }
    }
}

/// Base block for an optional priority ordering.
pub fn base_stats(attitudinal: Option<ApType>) -> (StatBlock, BaseSource) {
    match attitudinal {
        Some(ty) => {
            let mut block = StatBlock::uniform(0);
            for (position, aspect) in crate::systems::ApPosition::all()
                .into_iter()
                .zip(ty.aspects())
            {
                block = block.with(aspect.stat_axis(), position.stat_value());
            }
            (block, BaseSource::Attitudinal(ty))
        }
        None => (StatBlock::neutral(), BaseSource::Neutral),
    }
}

/// Composes the final stat block and its breakdown.
pub fn compose_stats(
    attitudinal: Option<ApType>,
    multipliers: &StatMultipliers,
    multiplier_source: impl Into<String>,
    overrides: &StatOverrides,
) -> (StatBlock, StatBreakdown) {
    let (base, base_source) = base_stats(attitudinal);
    let breakdown = StatBreakdown {
        base,
        base_source,
        multipliers: *multipliers,
        multiplier_source: multiplier_source.into(),
        overrides: *overrides,
    };
    let stats = breakdown.recompose();

    tracing::debug!(
        ?base_source,
        source = %breakdown.multiplier_source,
        total = stats.total(),
        "composed stat block"
    );

    (stats, breakdown)
}
