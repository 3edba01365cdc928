//! The UUID attribute type.

use crate::attr::{AttrKind, AttrType, AttrValue, TypeWithValidate};
use crate::diag::{Diagnostic, Diagnostics};
use crate::error::{Result, UuidTypeError};
use crate::parse;
use crate::path::{AttributePath, PathStep};
use crate::uuid_value::UuidValue;
use crate::wire::{WireError, WireType, WireValue};

/// The name the type renders as.
pub const TYPE_NAME: &str = "uuidtype::UuidType";

pub(crate) const INVALID_WIRE_SUMMARY: &str = "Invalid UUID Terraform Value";

/// Marker for attributes holding a UUID. Carried on the wire as a string.
///
/// All instances are interchangeable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UuidType;

impl UuidType {
    /// The value this type produces when nothing has been set.
    pub fn value_type(&self) -> UuidValue {
        UuidValue::Null
    }

    /// Converts a wire value into a [`UuidValue`].
    ///
    /// Null and unknown wire values map to the matching states without error. An `Err` stands
    /// for an unknown value: the caller must not trust the attribute.
    pub fn parse_wire(&self, value: &WireValue) -> Result<UuidValue> {
        if value.is_null() {
            return Ok(UuidValue::Null);
        }
        if !value.is_known() {
            return Ok(UuidValue::Unknown);
        }

        let s = value.as_str().inspect_err(|err| {
            tracing::debug!(error = %err, "{} received a non-string wire value", TYPE_NAME);
        })?;

        parse::parse(s)
            .map(UuidValue::Known)
            .map_err(|source| {
                tracing::debug!(value = s, error = %source, "{} rejected wire value", TYPE_NAME);
                UuidTypeError::InvalidUuid {
                    value: s.to_string(),
                    source,
                }
            })
    }
}

fn invalid_wire_diagnostic(path: &AttributePath, err: &WireError) -> Diagnostic {
    Diagnostic::attribute_error(
        path.clone(),
        INVALID_WIRE_SUMMARY,
        format!(
            "An unexpected error occurred while attempting to read a UUID string from the Terraform value. \
             Please contact the provider developers with the following:\n\n\
             Error: {}",
            err
        ),
    )
}

impl std::fmt::Display for UuidType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TYPE_NAME)
    }
}

impl AttrType for UuidType {
    fn kind(&self) -> AttrKind {
        AttrKind::Uuid
    }

    fn equal(&self, other: &dyn AttrType) -> bool {
        other.kind() == AttrKind::Uuid
    }

    fn wire_type(&self) -> WireType {
        WireType::String
    }

    fn apply_path_step(&self, step: &PathStep) -> Result<Box<dyn AttrType>> {
        Err(UuidTypeError::PathStep {
            step: step.kind_name(),
            type_name: TYPE_NAME,
        })
    }

    fn value_from_wire(&self, value: &WireValue) -> Result<Box<dyn AttrValue>> {
        Ok(Box::new(self.parse_wire(value)?))
    }
}

impl TypeWithValidate for UuidType {
    fn validate(&self, value: &WireValue, path: &AttributePath) -> Diagnostics {
        tracing::trace!(%path, "validating {}", TYPE_NAME);

        if value.is_null() || !value.is_known() {
            return Diagnostics::new();
        }

        let s = match value.as_str() {
            Ok(s) => s,
            Err(err) => return invalid_wire_diagnostic(path, &err).into(),
        };

        match UuidValue::from_string(s, path) {
            Ok(_) => Diagnostics::new(),
            Err(diags) => diags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        StringType, UUID_INVALID_FORMAT, UUID_INVALID_LENGTH, UUID_V1, UUID_V3, UUID_V4, UUID_V5,
    };
    use crate::parse::ParseError;
    use crate::uuid_value::INVALID_STRING_SUMMARY;

    fn test_path() -> AttributePath {
        AttributePath::root("test")
    }

    #[test]
    fn test_equal() {
        assert!(UuidType.equal(&UuidType));
        assert!(UuidType::default().equal(&UuidType));
        assert!(!UuidType.equal(&StringType));
    }

    #[test]
    fn test_display() {
        assert_eq!(UuidType.to_string(), "uuidtype::UuidType");
    }

    #[test]
    fn test_wire_type_is_string() {
        assert_eq!(UuidType.wire_type(), WireType::String);
    }

    #[test]
    fn test_value_type_is_null() {
        assert_eq!(UuidType.value_type(), UuidValue::Null);
    }

    #[test]
    fn test_apply_path_step_always_fails() {
        let steps = [
            PathStep::AttributeName("id".into()),
            PathStep::ElementKeyString("id".into()),
            PathStep::ElementKeyInt(0),
        ];
        for step in steps {
            let err = UuidType.apply_path_step(&step).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "cannot apply AttributePathStep {} to uuidtype::UuidType",
                    step.kind_name()
                )
            );
        }
    }

    #[test]
    fn test_validate_not_string() {
        let diags = UuidType.validate(&WireValue::from(false), &test_path());

        assert_eq!(
            diags,
            Diagnostics::from(Diagnostic::attribute_error(
                test_path(),
                "Invalid UUID Terraform Value",
                "An unexpected error occurred while attempting to read a UUID string from the Terraform value. \
                 Please contact the provider developers with the following:\n\n\
                 Error: can't read a Bool wire value as a String",
            ))
        );
    }

    #[test]
    fn test_validate_null_and_unknown() {
        assert!(UuidType
            .validate(&WireValue::null_string(), &test_path())
            .is_empty());
        assert!(UuidType
            .validate(&WireValue::unknown_string(), &test_path())
            .is_empty());
        // Unresolved values of any type are left to the host
        assert!(UuidType
            .validate(&WireValue::Unknown(WireType::Bool), &test_path())
            .is_empty());
    }

    #[test]
    fn test_validate_invalid_length() {
        let diags = UuidType.validate(&WireValue::from(UUID_INVALID_LENGTH), &test_path());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].summary, INVALID_STRING_SUMMARY);
        assert_eq!(diags[0].path, Some(test_path()));
        assert!(diags[0]
            .detail
            .ends_with("Parse Error: invalid UUID length: 17"));
    }

    #[test]
    fn test_validate_invalid_format() {
        let diags = UuidType.validate(&WireValue::from(UUID_INVALID_FORMAT), &test_path());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].summary, INVALID_STRING_SUMMARY);
        assert!(diags[0].detail.ends_with("Parse Error: invalid UUID format"));
    }

    #[test]
    fn test_validate_valid_versions() {
        for input in [UUID_V1, UUID_V3, UUID_V4, UUID_V5] {
            assert!(
                UuidType
                    .validate(&WireValue::from(input), &test_path())
                    .is_empty(),
                "{} should be valid",
                input
            );
        }
    }

    #[test]
    fn test_parse_wire_null_and_unknown() {
        assert_eq!(
            UuidType.parse_wire(&WireValue::null_string()),
            Ok(UuidValue::Null)
        );
        assert_eq!(
            UuidType.parse_wire(&WireValue::unknown_string()),
            Ok(UuidValue::Unknown)
        );
    }

    #[test]
    fn test_parse_wire_not_string() {
        assert_eq!(
            UuidType.parse_wire(&WireValue::from(false)),
            Err(UuidTypeError::WireType(WireError::TypeMismatch {
                expected: WireType::String,
                found: WireType::Bool,
            }))
        );
    }

    #[test]
    fn test_parse_wire_invalid() {
        assert_eq!(
            UuidType.parse_wire(&WireValue::from(UUID_INVALID_LENGTH)),
            Err(UuidTypeError::InvalidUuid {
                value: UUID_INVALID_LENGTH.into(),
                source: ParseError::InvalidLength(17),
            })
        );

        let err = UuidType
            .parse_wire(&WireValue::from(UUID_INVALID_FORMAT))
            .unwrap_err();
        assert!(err.to_string().ends_with("invalid UUID format"));
    }

    #[test]
    fn test_parse_wire_valid() {
        for input in [UUID_V1, UUID_V3, UUID_V4, UUID_V5] {
            let value = UuidType.parse_wire(&WireValue::from(input)).unwrap();
            assert_eq!(value.to_string(), input);
        }
    }

    #[test]
    fn test_value_from_wire_boxes_uuid_value() {
        let value = UuidType
            .value_from_wire(&WireValue::from(UUID_V4))
            .unwrap();
        assert_eq!(value.to_string(), UUID_V4);
        assert!(value.attr_type().equal(&UuidType));

        assert!(UuidType
            .value_from_wire(&WireValue::from(UUID_INVALID_LENGTH))
            .is_err());
    }
}
