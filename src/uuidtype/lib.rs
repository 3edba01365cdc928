//! # uuidtype Architecture
//!
//! uuidtype is a **custom attribute type** for provider plugin frameworks. It lets schema
//! authors declare fields that must hold an [RFC 4122] UUID, and hands the host framework a
//! type/value pair that validates, converts and compares such fields.
//!
//! ## The Two Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Type Layer (uuid_type.rs)                                  │
//! │  - Declares the wire shape (a string)                       │
//! │  - Validates wire values into Diagnostics                   │
//! │  - Converts wire values into UuidValue                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Value Layer (uuid_value.rs)                                │
//! │  - Null / Unknown / Known(Uuid), nothing else               │
//! │  - Equality, rendering, conversion back to the wire         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parse.rs)                                          │
//! │  - Length gate, then the `uuid` crate                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host contract lives in [`attr`], [`wire`], [`path`] and [`diag`]. Those modules only
//! carry the shapes this crate needs to talk to a host; registering types, walking attribute
//! trees and reporting diagnostics to the user stay on the host side.
//!
//! ## Value States
//!
//! | State | Rendered as | Wire value |
//! |-------|-------------|------------|
//! | `Null` | `<null>` | null string |
//! | `Unknown` | `<unknown>` | unknown string |
//! | `Known(uuid)` | `eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c` | the canonical string |
//!
//! A `Known` value only ever holds a UUID that parsed. Strings that fail to parse are reported
//! as diagnostics (from [`UuidType::validate`](attr::TypeWithValidate::validate)) or errors
//! (from [`UuidType::parse_wire`]); they never become `Known`.
//!
//! ## Usage
//!
//! ```
//! use uuidtype::attr::{AttrValue, TypeWithValidate};
//! use uuidtype::path::AttributePath;
//! use uuidtype::wire::WireValue;
//! use uuidtype::{UuidType, UuidValue};
//!
//! let wire = WireValue::from("EB6F148A-6637-4C6B-A4BB-B75B2A1B5A3C");
//! let path = AttributePath::root("id");
//!
//! assert!(UuidType.validate(&wire, &path).is_empty());
//!
//! let value = UuidType.parse_wire(&wire).unwrap();
//! let expected: UuidValue = "eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c".parse().unwrap();
//! assert!(value.equal(&expected));
//! assert_eq!(value.to_string(), "eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c");
//! ```
//!
//! ## Module Overview
//!
//! - [`uuid_type`]: the [`UuidType`] marker
//! - [`uuid_value`]: the [`UuidValue`] tri-state value
//! - [`parse`]: UUID parsing with length/format error classification
//! - [`attr`]: host traits for attribute types and values
//! - [`wire`]: wire values exchanged with the host
//! - [`path`]: attribute paths that locate diagnostics
//! - [`diag`]: diagnostics
//! - [`error`]: error types
//!
//! [RFC 4122]: https://tools.ietf.org/html/rfc4122

pub mod attr;
pub mod diag;
pub mod error;
pub mod parse;
pub mod path;
pub mod uuid_type;
pub mod uuid_value;
pub mod wire;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

pub use error::{Result, UuidTypeError};
pub use uuid_type::UuidType;
pub use uuid_value::UuidValue;
