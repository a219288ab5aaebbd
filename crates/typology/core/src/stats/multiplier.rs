//! Per-axis stat multipliers.
//!
//! Multipliers are stored as integer percentages (e.g., 120 = ×1.2) so every
//! computation is integer-only and reproducible across platforms:
//!
//! ```text
//! result = floor(value × percent / 100)
//! ```

use super::block::{StatAxis, StatBlock};
use crate::config::EngineConfig;

/// Multiplier percentages for each stat axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMultipliers {
    percents: [i32; StatAxis::COUNT],
}

impl StatMultipliers {
    /// Multipliers that leave every axis unchanged.
    pub const NEUTRAL: Self = Self {
        percents: [EngineConfig::NEUTRAL_MULTIPLIER; StatAxis::COUNT],
    };

    /// Creates multipliers from percentages in axis order
    /// (willpower, intelligence, spirit, vitality).
    pub const fn from_percents(
        willpower: i32,
        intelligence: i32,
        spirit: i32,
        vitality: i32,
    ) -> Self {
        Self {
            percents: [willpower, intelligence, spirit, vitality],
        }
    }

    /// Percentage for an axis (100 = unchanged).
    #[inline]
    pub const fn percent(&self, axis: StatAxis) -> i32 {
        self.percents[axis.as_index()]
    }

    #[inline]
    pub const fn percents(&self) -> &[i32; StatAxis::COUNT] {
        &self.percents
    }

    /// Applies the multiplier for `axis` to a value.
    ///
    /// Integer floor division keeps the result identical on every platform.
    #[inline]
    pub const fn apply(&self, axis: StatAxis, value: i32) -> i32 {
        (value * self.percent(axis)).div_euclid(100)
    }

    /// Applies every multiplier to a block (no clamping).
    pub fn apply_block(&self, block: &StatBlock) -> StatBlock {
        StatBlock::from_fn(|axis| self.apply(axis, block.get(axis)))
    }

    /// Returns true if no axis is modified.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Weighted integer average of several multiplier sets.
    ///
    /// Formula: `percent[axis] = Σ(weight × percent) / Σ(weight)` (floor).
    /// Returns [`StatMultipliers::NEUTRAL`] when the weights sum to zero.
    pub fn weighted_average<'a>(
        parts: impl IntoIterator<Item = (i32, &'a StatMultipliers)>,
    ) -> Self {
        let mut sums = [0i32; StatAxis::COUNT];
        let mut total_weight = 0;

        for (weight, multipliers) in parts {
            total_weight += weight;
            for axis in StatAxis::all() {
                sums[axis.as_index()] += weight * multipliers.percent(axis);
            }
        }

        if total_weight == 0 {
            return Self::NEUTRAL;
        }

        Self {
            percents: sums.map(|sum| sum.div_euclid(total_weight)),
        }
    }
}

impl Default for StatMultipliers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
