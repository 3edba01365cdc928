//! Wire values exchanged with the host framework.
//!
//! The host serializes every attribute into a typed primitive that may also be null or not yet
//! known. UUID attributes only ever travel as strings; the other primitives exist here so that
//! a mis-wired schema can be represented and reported.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The primitive type of a wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireType {
    String,
    Bool,
    Number,
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireType::String => write!(f, "String"),
            WireType::Bool => write!(f, "Bool"),
            WireType::Number => write!(f, "Number"),
        }
    }
}

/// A single value as the host hands it over.
///
/// `Null` and `Unknown` keep the primitive type they were declared with, so an unknown string
/// and an unknown bool are different wire values.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null(WireType),
    Unknown(WireType),
    String(String),
    Bool(bool),
    Number(f64),
}

impl WireValue {
    /// A null string value.
    pub fn null_string() -> Self {
        WireValue::Null(WireType::String)
    }

    /// A string value that is not known yet (e.g. computed during apply).
    pub fn unknown_string() -> Self {
        WireValue::Unknown(WireType::String)
    }

    pub fn wire_type(&self) -> WireType {
        match self {
            WireValue::Null(ty) | WireValue::Unknown(ty) => *ty,
            WireValue::String(_) => WireType::String,
            WireValue::Bool(_) => WireType::Bool,
            WireValue::Number(_) => WireType::Number,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null(_))
    }

    /// Returns `false` only for unresolved values. Null values are known.
    pub fn is_known(&self) -> bool {
        !matches!(self, WireValue::Unknown(_))
    }

    /// Reads the value as a string.
    ///
    /// Fails for null and unknown values as well as for any non-string primitive.
    pub fn as_str(&self) -> Result<&str, WireError> {
        match self {
            WireValue::String(s) => Ok(s),
            WireValue::Null(ty) => Err(WireError::Null(*ty)),
            WireValue::Unknown(ty) => Err(WireError::Unknown(*ty)),
            other => Err(WireError::TypeMismatch {
                expected: WireType::String,
                found: other.wire_type(),
            }),
        }
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::String(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::String(value)
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Bool(value)
    }
}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::Number(value)
    }
}

/// Failure to read a wire value as the requested primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("can't read a {found} wire value as a {expected}")]
    TypeMismatch { expected: WireType, found: WireType },

    #[error("can't read a null {0} wire value")]
    Null(WireType),

    #[error("can't read an unknown {0} wire value")]
    Unknown(WireType),
}
