//! Common error infrastructure for typology-core.
//!
//! Builders themselves never fail. Errors only arise at the validation
//! boundary (an ill-formed selection) and in the quiz session state machine.
//! Every error type implements [`TypologyError`] so front ends can classify
//! failures uniformly.

use crate::systems::{EnneagramType, Instinct, InstinctRealm};

/// Severity level of an error.
///
/// - **Validation**: the caller supplied something illegal; fix the input and retry
/// - **Internal**: a state-machine misuse that indicates a bug in the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all typology-core errors.
pub trait TypologyError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Input-contract violations detected before generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputError {
    #[error("{0} is not an enneagram type (expected 1-9)")]
    UnknownEnneagramType(u8),

    #[error("{wing} is not a wing of type {core}")]
    InvalidWing {
        core: EnneagramType,
        wing: EnneagramType,
    },

    #[error("instinct stack repeats the primary instinct {0}")]
    DuplicateInstinct(Instinct),

    #[error("tritype fix {fix} shares a center with core type {core}")]
    TritypeCoreCenter {
        core: EnneagramType,
        fix: EnneagramType,
    },

    #[error("tritype fixes {second} and {third} share a center")]
    TritypeRepeatedCenter {
        second: EnneagramType,
        third: EnneagramType,
    },

    #[error("realm tritype fix {fix} shares a center with core realm {core}")]
    RealmTritypeCoreCenter {
        core: InstinctRealm,
        fix: InstinctRealm,
    },

    #[error("realm tritype fixes {second} and {third} share a center")]
    RealmTritypeRepeatedCenter {
        second: InstinctRealm,
        third: InstinctRealm,
    },
}

impl TypologyError for InputError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InputError::*;
        match self {
            UnknownEnneagramType(_) => "INPUT_UNKNOWN_ENNEAGRAM_TYPE",
            InvalidWing { .. } => "INPUT_INVALID_WING",
            DuplicateInstinct(_) => "INPUT_DUPLICATE_INSTINCT",
            TritypeCoreCenter { .. } => "INPUT_TRITYPE_CORE_CENTER",
            TritypeRepeatedCenter { .. } => "INPUT_TRITYPE_REPEATED_CENTER",
            RealmTritypeCoreCenter { .. } => "INPUT_REALM_TRITYPE_CORE_CENTER",
            RealmTritypeRepeatedCenter { .. } => "INPUT_REALM_TRITYPE_REPEATED_CENTER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_validation_errors() {
        let err = InputError::InvalidWing {
            core: EnneagramType::Five,
            wing: EnneagramType::Seven,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "INPUT_INVALID_WING");
        assert_eq!(err.to_string(), "7 is not a wing of type 5");
    }
}
