//! Inferred typology per system.

use super::bank::QuizStrategy;
use super::scoring::ScoreBreakdown;
use crate::character::{EnneagramSelection, GeneratorInput, InstinctSelection};
use crate::systems::{
    ApType, Aspect, CognitiveFunction, EnneagramType, Instinct, InstinctCenter, InstinctRealm,
    MbtiType, Pole, Quadra, SocionicsType,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttitudinalResult {
    pub ap_type: ApType,
    pub aspects: ScoreBreakdown<Aspect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnneagramResult {
    pub selection: EnneagramSelection,
    pub types: ScoreBreakdown<EnneagramType>,
    pub instincts: ScoreBreakdown<Instinct>,
}

/// What an MBTI result was inferred from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MbtiEvidence {
    Poles(ScoreBreakdown<Pole>),
    Functions(ScoreBreakdown<CognitiveFunction>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MbtiResult {
    pub mbti_type: MbtiType,
    pub evidence: MbtiEvidence,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocionicsResult {
    pub socionics_type: SocionicsType,
    pub poles: ScoreBreakdown<Pole>,
    /// Present only for the deep strategy.
    pub quadras: Option<ScoreBreakdown<Quadra>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstinctsResult {
    pub selection: InstinctSelection,
    /// Present only for the quick strategy.
    pub centers: Option<ScoreBreakdown<InstinctCenter>>,
    pub realms: ScoreBreakdown<InstinctRealm>,
}

/// Everything one scored quiz inferred.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizResults {
    pub strategy: QuizStrategy,
    pub attitudinal: AttitudinalResult,
    pub enneagram: EnneagramResult,
    pub mbti: MbtiResult,
    pub socionics: SocionicsResult,
    pub instincts: InstinctsResult,
}

impl QuizResults {
    /// Generator input selecting every inferred type, with no overrides.
    pub fn to_generator_input(&self) -> GeneratorInput {
        GeneratorInput {
            attitudinal: Some(self.attitudinal.ap_type),
            enneagram: Some(self.enneagram.selection),
            mbti: Some(self.mbti.mbti_type),
            socionics: Some(self.socionics.socionics_type),
            instincts: Some(self.instincts.selection),
            ..GeneratorInput::default()
        }
    }
}
