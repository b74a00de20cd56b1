//! Recovered parse results
//!
//! Every field a stage reads is parsed into a [`Parsed`] value: either the
//! parsed value, or the stage's safe default together with the reason the
//! default was used. Nothing here ever fails outright.

use core_kernel::CoreError;

use crate::claim::ClaimField;
use crate::error::FieldError;

/// Outcome of parsing one claim field
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// The field was present and parsed
    Ok(T),
    /// The field was missing or malformed and the default was substituted
    Default(T, FieldError),
}

impl<T> Parsed<T> {
    /// Parses a raw field value, substituting `default` when the field is
    /// absent or the parser rejects it.
    pub fn field<E>(
        raw: Option<&str>,
        field: ClaimField,
        default: T,
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> Self
    where
        E: Into<CoreError>,
    {
        match raw {
            None => Parsed::Default(default, FieldError::Missing(field)),
            Some(text) => match parse(text) {
                Ok(value) => Parsed::Ok(value),
                Err(err) => Parsed::Default(default, FieldError::malformed(field, err)),
            },
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Parsed::Ok(value) | Parsed::Default(value, _) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Parsed::Ok(value) | Parsed::Default(value, _) => value,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Parsed::Default(..))
    }

    /// The reason the default was used, if it was
    pub fn reason(&self) -> Option<&FieldError> {
        match self {
            Parsed::Ok(_) => None,
            Parsed::Default(_, reason) => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Ok(value) => Parsed::Ok(f(value)),
            Parsed::Default(value, reason) => Parsed::Default(f(value), reason),
        }
    }
}
