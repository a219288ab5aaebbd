/// Engine constants shared by every builder.
///
/// These values are authoritative data: changing any of them changes the
/// numbers every existing character displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig;

impl EngineConfig {
    // ===== stat block =====
    /// Lowest value any stat axis can take.
    pub const MIN_STAT: i32 = 0;
    /// Highest value any stat axis can take.
    pub const MAX_STAT: i32 = 20;
    /// Base value of every axis when the cognitive-priority system is disabled.
    pub const NEUTRAL_STAT: i32 = 10;
    /// Base stat granted to the aspect in each priority position (1st..4th).
    pub const POSITION_VALUES: [i32; 4] = [14, 10, 7, 4];

    // ===== archetype multipliers =====
    /// Multiplier percentage that leaves a stat unchanged.
    pub const NEUTRAL_MULTIPLIER: i32 = 100;
    /// Tritype blend weights for core, second fix and third fix (1.0 / 0.5 / 0.3).
    pub const TRITYPE_WEIGHTS: [i32; 3] = [10, 5, 3];

    // ===== abilities =====
    /// Base power per ability slot (hero, parent, child, inferior).
    pub const SLOT_BASE_POWER: [i32; 4] = [10, 8, 6, 4];
    /// Scaling stat contributes `floor(stat / POWER_SCALING_DIVISOR)` power.
    pub const POWER_SCALING_DIVISOR: i32 = 2;

    // ===== collections =====
    /// Upper bound on passives carried by an archetype or combat behavior.
    pub const MAX_PASSIVES: usize = 8;
    /// Number of blend steps recorded for a tritype archetype.
    pub const TRITYPE_STEPS: usize = 3;

    // ===== cosmetics =====
    /// Seed used for name generation when the caller supplies none.
    pub const DEFAULT_NAME_SEED: u64 = 0;

    /// Highest power an ability with the given base power can display.
    pub const fn power_ceiling(base_power: i32) -> i32 {
        base_power + Self::MAX_STAT / Self::POWER_SCALING_DIVISOR
    }
}
