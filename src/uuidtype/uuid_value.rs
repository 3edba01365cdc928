//! The UUID attribute value.
//!
//! A [`UuidValue`] is exactly one of null, unknown or a parsed UUID. There is no way to build a
//! known value from a string that failed to parse: [`UuidValue::from_string`] and
//! [`FromStr`] both reject it, and the only other way in is an already-parsed [`Uuid`].

use std::str::FromStr;

use uuid::Uuid;

use crate::attr::{AttrKind, AttrType, AttrValue, NULL_VALUE_STRING, UNKNOWN_VALUE_STRING};
use crate::diag::{Diagnostic, Diagnostics};
use crate::parse::{self, ParseError};
use crate::path::AttributePath;
use crate::uuid_type::UuidType;
use crate::wire::WireValue;

pub(crate) const INVALID_STRING_SUMMARY: &str = "Invalid UUID String Value";

/// A UUID attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidValue {
    /// Explicitly absent.
    Null,
    /// Not resolved yet, or not trustworthy after a failed conversion.
    Unknown,
    Known(Uuid),
}

impl UuidValue {
    pub fn from_uuid(id: Uuid) -> Self {
        UuidValue::Known(id)
    }

    /// Parses `value`, reporting a failure as an error diagnostic at `path`.
    pub fn from_string(value: &str, path: &AttributePath) -> Result<Self, Diagnostics> {
        match parse::parse(value) {
            Ok(id) => Ok(UuidValue::Known(id)),
            Err(err) => {
                tracing::debug!(%path, value, error = %err, "rejected UUID string");
                Err(invalid_string_diagnostic(path, value, &err).into())
            }
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, UuidValue::Null)
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, UuidValue::Unknown)
    }

    pub const fn is_known(&self) -> bool {
        matches!(self, UuidValue::Known(_))
    }

    /// The UUID, if the value is known.
    pub fn value_uuid(&self) -> Option<Uuid> {
        match self {
            UuidValue::Known(id) => Some(*id),
            _ => None,
        }
    }
}

/// Builds the end-user diagnostic for a string that is not a UUID.
pub(crate) fn invalid_string_diagnostic(
    path: &AttributePath,
    value: &str,
    err: &ParseError,
) -> Diagnostic {
    Diagnostic::attribute_error(
        path.clone(),
        INVALID_STRING_SUMMARY,
        format!(
            "An unexpected error occurred attempting to parse a string value that was expected to be a valid UUID format. \
             The expected UUID format is 00000000-0000-0000-0000-00000000. \
             For example, a Version 4 UUID is of the form 7b16fd41-cc23-4ef7-8aa9-c598350ccd18.\n\n\
             Provided Value: {:?}\n\
             Parse Error: {}",
            value, err
        ),
    )
}

impl From<Uuid> for UuidValue {
    fn from(id: Uuid) -> Self {
        UuidValue::Known(id)
    }
}

impl FromStr for UuidValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s).map(UuidValue::Known)
    }
}

impl std::fmt::Display for UuidValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UuidValue::Null => write!(f, "{}", NULL_VALUE_STRING),
            UuidValue::Unknown => write!(f, "{}", UNKNOWN_VALUE_STRING),
            UuidValue::Known(id) => write!(f, "{}", id.hyphenated()),
        }
    }
}

impl AttrValue for UuidValue {
    fn kind(&self) -> AttrKind {
        AttrKind::Uuid
    }

    fn is_null(&self) -> bool {
        UuidValue::is_null(self)
    }

    fn is_unknown(&self) -> bool {
        UuidValue::is_unknown(self)
    }

    fn equal(&self, other: &dyn AttrValue) -> bool {
        // Wire forms differ across states and match byte-for-byte on canonical strings.
        other.kind() == AttrKind::Uuid && other.to_wire() == self.to_wire()
    }

    fn to_wire(&self) -> WireValue {
        match self {
            UuidValue::Null => WireValue::null_string(),
            UuidValue::Unknown => WireValue::unknown_string(),
            UuidValue::Known(id) => WireValue::String(id.hyphenated().to_string()),
        }
    }

    fn attr_type(&self) -> Box<dyn AttrType> {
        Box::new(UuidType)
    }
}
