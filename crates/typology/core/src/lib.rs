//! Deterministic typology-to-character rules engine.
//!
//! `typology-core` turns selections from five personality typology systems
//! into an RPG-style character: stats, class archetype, four abilities, an
//! element affinity and combat behavior. Everything here is a pure function
//! over immutable inputs; the crate performs no I/O.
//!
//! Generation flows through [`generate_character`], edits through
//! [`apply_edits`] and comparisons through [`compute_character_diff`]. The
//! [`quiz`] module infers selections from questionnaire answers.
pub mod character;
pub mod config;
pub mod error;
pub mod quiz;
pub mod stats;
pub mod systems;

pub use character::{
    Ability, AbilityKit, AbilityNameEdits, AbilitySlot, Archetype, Character, CharacterDiff,
    CharacterEdits, CombatBehavior, ElementAffinity, EnneagramSelection, GeneratorInput,
    InstinctSelection, ManualOverrides, PassiveTrait, StatBlendStep, TypologySource, apply_edits,
    build_ability_kit, build_archetype, build_combat_behavior, build_element_affinity,
    build_tritype_archetype, build_typology_summary, compute_character_diff, generate_character,
    is_stat_budget_valid,
};
pub use config::EngineConfig;
pub use error::{ErrorSeverity, InputError, TypologyError};
pub use quiz::{
    QuizAnswerMap, QuizBank, QuizError, QuizResults, QuizSession, QuizState, QuizStrategy,
    score_quiz,
};
pub use stats::{StatAxis, StatBlock, StatBreakdown, StatMultipliers, StatOverrides, compose_stats};
pub use systems::{
    ApType, Aspect, CognitiveFunction, Element, EnneagramType, Instinct, InstinctRealm, MbtiType,
    Quadra, SocionicsType, SystemId, SystemSet, Tritype,
};
