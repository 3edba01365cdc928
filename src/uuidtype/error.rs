use thiserror::Error;

use crate::parse::ParseError;
use crate::wire::WireError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UuidTypeError {
    /// The wire value could not be read as a string. Points at a schema wiring bug.
    #[error("Wire value error: {0}")]
    WireType(#[from] WireError),

    #[error("Invalid UUID {value:?}: {source}")]
    InvalidUuid {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot apply AttributePathStep {step} to {type_name}")]
    PathStep {
        step: &'static str,
        type_name: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, UuidTypeError>;
