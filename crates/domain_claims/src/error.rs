//! Claims domain errors

use core_kernel::CoreError;
use thiserror::Error;

use crate::claim::ClaimField;

/// Why a stage fell back to its default for a claim field.
///
/// These never escape the pipeline; they ride along inside
/// [`Parsed::Default`](crate::parsed::Parsed) so callers and tests can see
/// what was recovered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is missing")]
    Missing(ClaimField),

    #[error("{field} could not be parsed: {source}")]
    Malformed {
        field: ClaimField,
        source: CoreError,
    },
}

impl FieldError {
    pub fn malformed(field: ClaimField, source: impl Into<CoreError>) -> Self {
        FieldError::Malformed {
            field,
            source: source.into(),
        }
    }

    /// The field the failure relates to
    pub fn field(&self) -> ClaimField {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::Malformed { field, .. } => *field,
        }
    }
}
