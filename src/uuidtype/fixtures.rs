//! Test fixtures: sample UUIDs and a plain string attribute kind to compare against.

use crate::attr::{AttrKind, AttrType, AttrValue};
use crate::error::{Result, UuidTypeError};
use crate::path::PathStep;
use crate::uuid_value::UuidValue;
use crate::wire::{WireType, WireValue};

pub const UUID_V1: &str = "4ea3c666-4309-11ed-b878-0242ac120002";
pub const UUID_V3: &str = "a825d19e-3885-3df7-920a-a3678f53b2ee";
pub const UUID_V4: &str = "eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c";
pub const UUID_V5: &str = "f989a266-a679-5f41-92f7-22004c4da817";

/// Right length, wrong grouping.
pub const UUID_INVALID_FORMAT: &str = "actually-not-04a00-UUID-valueat0all0";
/// 17 characters.
pub const UUID_INVALID_LENGTH: &str = "not-a-uuid-at-all";

/// Parses a known-good UUID string.
pub fn known(value: &str) -> UuidValue {
    value.parse().expect("fixture UUID should parse")
}

/// A plain string attribute type, standing in for any non-UUID kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringType;

impl std::fmt::Display for StringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fixtures::StringType")
    }
}

impl AttrType for StringType {
    fn kind(&self) -> AttrKind {
        AttrKind::String
    }

    fn equal(&self, other: &dyn AttrType) -> bool {
        other.kind() == AttrKind::String
    }

    fn wire_type(&self) -> WireType {
        WireType::String
    }

    fn apply_path_step(&self, step: &PathStep) -> Result<Box<dyn AttrType>> {
        Err(UuidTypeError::PathStep {
            step: step.kind_name(),
            type_name: "fixtures::StringType",
        })
    }

    fn value_from_wire(&self, value: &WireValue) -> Result<Box<dyn AttrValue>> {
        let value = match value {
            WireValue::Null(_) => StringValue::null(),
            WireValue::Unknown(_) => StringValue::unknown(),
            other => StringValue::known(other.as_str()?),
        };
        Ok(Box::new(value))
    }
}

/// A plain string attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringValue {
    Null,
    Unknown,
    Known(String),
}

impl StringValue {
    pub fn null() -> Self {
        StringValue::Null
    }

    pub fn unknown() -> Self {
        StringValue::Unknown
    }

    pub fn known(value: &str) -> Self {
        StringValue::Known(value.to_string())
    }
}

impl std::fmt::Display for StringValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringValue::Null => write!(f, "{}", crate::attr::NULL_VALUE_STRING),
            StringValue::Unknown => write!(f, "{}", crate::attr::UNKNOWN_VALUE_STRING),
            StringValue::Known(s) => write!(f, "{:?}", s),
        }
    }
}

impl AttrValue for StringValue {
    fn kind(&self) -> AttrKind {
        AttrKind::String
    }

    fn is_null(&self) -> bool {
        matches!(self, StringValue::Null)
    }

    fn is_unknown(&self) -> bool {
        matches!(self, StringValue::Unknown)
    }

    fn equal(&self, other: &dyn AttrValue) -> bool {
        other.kind() == AttrKind::String && other.to_wire() == self.to_wire()
    }

    fn to_wire(&self) -> WireValue {
        match self {
            StringValue::Null => WireValue::null_string(),
            StringValue::Unknown => WireValue::unknown_string(),
            StringValue::Known(s) => WireValue::String(s.clone()),
        }
    }

    fn attr_type(&self) -> Box<dyn AttrType> {
        Box::new(StringType)
    }
}
