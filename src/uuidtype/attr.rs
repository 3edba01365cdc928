//! Host contract for attribute types and values.
//!
//! The host framework drives every attribute through these traits: it asks the type to
//! validate and convert what arrived on the wire, and it asks the resulting value for its
//! state, its rendering and its wire form. Dynamic equality is decided by the closed
//! [`AttrKind`] tag rather than by downcasting.

use crate::diag::Diagnostics;
use crate::error::Result;
use crate::path::{AttributePath, PathStep};
use crate::wire::{WireType, WireValue};

/// Rendering of a null value.
pub const NULL_VALUE_STRING: &str = "<null>";

/// Rendering of an unknown value.
pub const UNKNOWN_VALUE_STRING: &str = "<unknown>";

/// The closed set of attribute kinds this crate knows how to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    String,
    Bool,
    Number,
    Uuid,
}

/// An attribute type as seen by the host.
pub trait AttrType: std::fmt::Debug + std::fmt::Display + Send + Sync {
    fn kind(&self) -> AttrKind;

    /// Whether `other` describes the same type.
    fn equal(&self, other: &dyn AttrType) -> bool;

    /// The primitive the type travels as on the wire.
    fn wire_type(&self) -> WireType;

    /// Descends one step into the type. Scalar types always fail.
    fn apply_path_step(&self, step: &PathStep) -> Result<Box<dyn AttrType>>;

    /// Converts a wire value into a value of this type.
    fn value_from_wire(&self, value: &WireValue) -> Result<Box<dyn AttrValue>>;
}

/// A type that checks wire values before conversion.
pub trait TypeWithValidate: AttrType {
    fn validate(&self, value: &WireValue, path: &AttributePath) -> Diagnostics;
}

/// An attribute value as seen by the host.
pub trait AttrValue: std::fmt::Debug + std::fmt::Display + Send + Sync {
    fn kind(&self) -> AttrKind;

    fn is_null(&self) -> bool;

    fn is_unknown(&self) -> bool;

    /// Whether `other` is the same kind of value in the same state with the same payload.
    fn equal(&self, other: &dyn AttrValue) -> bool;

    fn to_wire(&self) -> WireValue;

    /// The type that produced this value.
    fn attr_type(&self) -> Box<dyn AttrType>;
}
