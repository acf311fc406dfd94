use super::Error;

use indexmap::IndexMap;

/// Accumulated field-level validation failures.
///
/// Validation never throws per field: every failing field gets one message
/// and the whole map is reported at once. The map preserves field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: IndexMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Records `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merges `newer` into this accumulator. Entries in `newer` take
    /// precedence over same-keyed entries already present.
    pub fn absorb(&mut self, newer: ValidationErrors) {
        for (field, message) in newer.errors {
            self.errors.insert(field, message);
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("validation failed")?;
        let mut sep = ": ";
        for (field, message) in self.iter() {
            write!(f, "{sep}{field}: {message}")?;
            sep = "; ";
        }
        Ok(())
    }
}

impl Error {
    /// Creates a validation error from the accumulated field errors.
    pub fn validation(errors: ValidationErrors) -> Error {
        Error::from(super::ErrorKind::Validation(errors))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }

    /// Returns the per-field validation errors if this is a validation
    /// error.
    pub fn as_validation_errors(&self) -> Option<&ValidationErrors> {
        match self.kind() {
            super::ErrorKind::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
