//! Precondition checks run before any request is sent.

use std::fmt::Display;

use crate::Error;

/// Identifier types accepted by resource operations.
///
/// The identifier type fixes the validation rule: strings must be non-blank,
/// integers must be positive.
pub trait ResourceId: Display + Sync {
    /// Checks the identifier, naming `label` in the error message.
    fn validate(&self, label: &str) -> Result<(), Error>;
}

impl ResourceId for str {
    fn validate(&self, label: &str) -> Result<(), Error> {
        validate_string_id(self, label)
    }
}

impl ResourceId for String {
    fn validate(&self, label: &str) -> Result<(), Error> {
        validate_string_id(self, label)
    }
}

impl ResourceId for i64 {
    fn validate(&self, label: &str) -> Result<(), Error> {
        validate_numeric_id(*self, label)
    }
}

impl ResourceId for i32 {
    fn validate(&self, label: &str) -> Result<(), Error> {
        validate_numeric_id(i64::from(*self), label)
    }
}

impl ResourceId for u32 {
    fn validate(&self, label: &str) -> Result<(), Error> {
        validate_numeric_id(i64::from(*self), label)
    }
}

/// Rejects empty or whitespace-only identifiers.
pub fn validate_string_id(id: &str, label: &str) -> Result<(), Error> {
    if id.trim().is_empty() {
        return Err(invalid(label));
    }
    Ok(())
}

/// Rejects identifiers below 1.
pub fn validate_numeric_id(id: i64, label: &str) -> Result<(), Error> {
    if id < 1 {
        return Err(invalid(label));
    }
    Ok(())
}

/// Substitutes a validated parent id into a `{parent}` path template.
pub fn expand_parent<P: ResourceId + ?Sized>(
    template: &str,
    parent: &P,
    label: &str,
) -> Result<String, Error> {
    parent.validate(label)?;
    Ok(template.replace("{parent}", &parent.to_string()))
}

fn invalid(label: &str) -> Error {
    Error::Validation(format!("Invalid {} id", label))
}
