//! UUID parsing.
//!
//! Accepted inputs (case-insensitive hex):
//! - Hyphenated: `eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c` (36 chars)
//! - Simple: `eb6f148a66374c6ba4bbb75b2a1b5a3c` (32 chars)
//! - Braced: `{eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c}` (38 chars)
//! - URN: `urn:uuid:eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c` (45 chars, prefix in any case)
//!
//! The length is checked before anything else, so an input of the wrong size always reports
//! [`ParseError::InvalidLength`] and only correctly sized input can fail with
//! [`ParseError::InvalidFormat`].

use thiserror::Error;
use uuid::Uuid;

const URN_PREFIX: &str = "urn:uuid:";

/// Parses `input` as an RFC 4122 UUID.
///
/// # Examples
/// ```
/// use uuidtype::parse::{parse, ParseError};
///
/// let id = parse("EB6F148A-6637-4C6B-A4BB-B75B2A1B5A3C").unwrap();
/// assert_eq!(id.to_string(), "eb6f148a-6637-4c6b-a4bb-b75b2a1b5a3c");
///
/// assert_eq!(parse("not-a-uuid-at-all"), Err(ParseError::InvalidLength(17)));
/// assert!(matches!(
///     parse("actually-not0-4a00-UUID-at0all00"),
///     Err(ParseError::InvalidFormat(_))
/// ));
/// ```
pub fn parse(input: &str) -> Result<Uuid, ParseError> {
    match input.len() {
        32 | 36 | 38 => Uuid::parse_str(input).map_err(ParseError::InvalidFormat),
        45 => {
            let Some(prefix) = input.get(..URN_PREFIX.len()) else {
                return Uuid::parse_str(input).map_err(ParseError::InvalidFormat);
            };
            if !prefix.eq_ignore_ascii_case(URN_PREFIX) {
                return Err(ParseError::InvalidUrnPrefix(prefix.to_string()));
            }
            Uuid::parse_str(&input[URN_PREFIX.len()..]).map_err(ParseError::InvalidFormat)
        }
        len => Err(ParseError::InvalidLength(len)),
    }
}

/// Why a string is not a UUID.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has none of the accepted lengths (32, 36, 38 or 45 bytes).
    #[error("invalid UUID length: {0}")]
    InvalidLength(usize),

    /// A 45-byte input that does not start with `urn:uuid:`.
    #[error("invalid urn prefix: {0:?}")]
    InvalidUrnPrefix(String),

    /// The length is right but the characters or grouping are not.
    #[error("invalid UUID format")]
    InvalidFormat(#[source] uuid::Error),
}
