//! Stat system.
//!
//! ```text
//! [ Base block ] → [ × Multipliers ] → [ Overrides ] → [ Clamp ]
//! ```
//!
//! All arithmetic is integer-only (multipliers are percentages), so the same
//! selection yields the same numbers on every platform.

pub mod block;
pub mod compose;
pub mod multiplier;

pub use block::{StatAxis, StatBlock, StatOverrides, clamp_stat};
pub use compose::{BaseSource, StatBreakdown, base_stats, compose_stats};
pub use multiplier::StatMultipliers;
