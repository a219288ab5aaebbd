//! Stat block - the four axes every character is measured on.
//!
//! A [`StatBlock`] is immutable once composed. The only way to obtain a
//! different block for a character is through the edit layer, which derives a
//! new block and records the change in the breakdown.

use crate::config::EngineConfig;

/// The four stat axes.
///
/// - **Willpower**: drive, conviction, force of action
/// - **Intelligence**: analysis, insight, pattern recognition
/// - **Spirit**: emotional resonance, morale, presence
/// - **Vitality**: physical endurance, sensory grounding
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
pub enum StatAxis {
    Willpower = 0,
    Intelligence = 1,
    Spirit = 2,
    Vitality = 3,
}

impl StatAxis {
    /// Total number of axes.
    pub const COUNT: usize = 4;

    /// Returns all axes in display order.
    pub const fn all() -> [StatAxis; Self::COUNT] {
        [
            StatAxis::Willpower,
            StatAxis::Intelligence,
            StatAxis::Spirit,
            StatAxis::Vitality,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used on compact stat cards.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            StatAxis::Willpower => "WIL",
            StatAxis::Intelligence => "INT",
            StatAxis::Spirit => "SPI",
            StatAxis::Vitality => "VIT",
        }
    }
}

/// Final stat values of a character, each within `[MIN_STAT, MAX_STAT]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub willpower: i32,
    pub intelligence: i32,
    pub spirit: i32,
    pub vitality: i32,
}

impl StatBlock {
    pub const fn new(willpower: i32, intelligence: i32, spirit: i32, vitality: i32) -> Self {
        Self {
            willpower,
            intelligence,
            spirit,
            vitality,
        }
    }

    /// Block with every axis set to the same value.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The block used when no cognitive-priority ordering is available.
    pub const fn neutral() -> Self {
        Self::uniform(EngineConfig::NEUTRAL_STAT)
    }

    #[inline]
    pub const fn get(&self, axis: StatAxis) -> i32 {
        match axis {
            StatAxis::Willpower => self.willpower,
            StatAxis::Intelligence => self.intelligence,
            StatAxis::Spirit => self.spirit,
            StatAxis::Vitality => self.vitality,
        }
    }

    /// Returns a copy with one axis replaced.
    #[must_use]
    pub const fn with(mut self, axis: StatAxis, value: i32) -> Self {
        match axis {
            StatAxis::Willpower => self.willpower = value,
            StatAxis::Intelligence => self.intelligence = value,
            StatAxis::Spirit => self.spirit = value,
            StatAxis::Vitality => self.vitality = value,
        }
        self
    }

    /// Builds a block by evaluating `f` once per axis.
    pub fn from_fn(mut f: impl FnMut(StatAxis) -> i32) -> Self {
        Self::new(
            f(StatAxis::Willpower),
            f(StatAxis::Intelligence),
            f(StatAxis::Spirit),
            f(StatAxis::Vitality),
        )
    }

    /// Clamps every axis to `[MIN_STAT, MAX_STAT]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::from_fn(|axis| clamp_stat(self.get(axis)))
    }

    /// Sum of all four axes.
    pub const fn total(&self) -> i32 {
        self.willpower + self.intelligence + self.spirit + self.vitality
    }

    /// The highest axis. Ties resolve to the first axis in display order.
    pub fn dominant_axis(&self) -> StatAxis {
        let mut best = StatAxis::Willpower;
        for axis in StatAxis::all() {
            if self.get(axis) > self.get(best) {
                best = axis;
            }
        }
        best
    }

    /// Iterates `(axis, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatAxis, i32)> + '_ {
        StatAxis::all().into_iter().map(|axis| (axis, self.get(axis)))
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Clamps a single stat value to the legal range.
#[inline]
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(EngineConfig::MIN_STAT, EngineConfig::MAX_STAT)
}

/// Sparse per-axis stat overrides.
///
/// A present value replaces the computed value for that axis verbatim
/// (only clamping still applies).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatOverrides {
    pub willpower: Option<i32>,
    pub intelligence: Option<i32>,
    pub spirit: Option<i32>,
    pub vitality: Option<i32>,
}

impl StatOverrides {
    /// No overrides at all.
    pub const EMPTY: Self = Self {
        willpower: None,
        intelligence: None,
        spirit: None,
        vitality: None,
    };

    #[inline]
    pub const fn get(&self, axis: StatAxis) -> Option<i32> {
        match axis {
            StatAxis::Willpower => self.willpower,
            StatAxis::Intelligence => self.intelligence,
            StatAxis::Spirit => self.spirit,
            StatAxis::Vitality => self.vitality,
        }
    }

    /// Returns a copy with one axis overridden.
    #[must_use]
    pub const fn with(mut self, axis: StatAxis, value: i32) -> Self {
        match axis {
            StatAxis::Willpower => self.willpower = Some(value),
            StatAxis::Intelligence => self.intelligence = Some(value),
            StatAxis::Spirit => self.spirit = Some(value),
            StatAxis::Vitality => self.vitality = Some(value),
        }
        self
    }

    /// Layers `other` on top of `self`; values present in `other` win.
    #[must_use]
    pub fn merged(self, other: &StatOverrides) -> Self {
        Self {
            willpower: other.willpower.or(self.willpower),
            intelligence: other.intelligence.or(self.intelligence),
            spirit: other.spirit.or(self.spirit),
            vitality: other.vitality.or(self.vitality),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.willpower.is_none()
            && self.intelligence.is_none()
            && self.spirit.is_none()
            && self.vitality.is_none()
    }

    /// Overrides every axis with the values of `block`.
    pub const fn from_block(block: &StatBlock) -> Self {
        Self {
            willpower: Some(block.willpower),
            intelligence: Some(block.intelligence),
            spirit: Some(block.spirit),
            vitality: Some(block.vitality),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_respects_bounds() {
        let block = StatBlock::new(-3, 25, 20, 0).clamped();
        assert_eq!(block, StatBlock::new(0, 20, 20, 0));
    }

    #[test]
    fn dominant_axis_prefers_display_order_on_ties() {
        let block = StatBlock::new(10, 14, 14, 4);
        assert_eq!(block.dominant_axis(), StatAxis::Intelligence);
        assert_eq!(StatBlock::neutral().dominant_axis(), StatAxis::Willpower);
    }

    #[test]
    fn merged_overrides_prefer_newer_values() {
        let generated = StatOverrides::EMPTY.with(StatAxis::Spirit, 3);
        let edits = StatOverrides::EMPTY
            .with(StatAxis::Spirit, 9)
            .with(StatAxis::Willpower, 15);

        let merged = generated.merged(&edits);
        assert_eq!(merged.spirit, Some(9));
        assert_eq!(merged.willpower, Some(15));
        assert_eq!(merged.vitality, None);
        assert!(StatOverrides::EMPTY.is_empty());
    }

    #[test]
    fn axis_names_parse_case_insensitively() {
        assert_eq!("Willpower".parse::<StatAxis>().unwrap(), StatAxis::Willpower);
        assert_eq!(StatAxis::Vitality.to_string(), "vitality");
    }
}
