//! Error type shared by the terrain crates.
//!
//! Only two kinds of input are rejected with an error. Ordinary game-logic
//! negatives (a blocked move, a create on an occupied cell, an exhausted
//! spawn search) are reported through `bool`/`Option` results instead.

/// Errors raised at the external-input boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    /// A required value was absent or malformed.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// A value outside the closed set of an enumerated type.
    #[error("invalid {kind} value `{value}`")]
    InvalidEnumValue { kind: &'static str, value: String },
}

impl TerrainError {
    pub fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { name, reason }
    }

    pub fn invalid_enum(kind: &'static str, value: impl ToString) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T, E = TerrainError> = std::result::Result<T, E>;
