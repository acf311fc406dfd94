use super::Error;

/// Error when the storage engine rejects a statement because it would
/// violate a uniqueness or integrity constraint.
///
/// Kept distinct from other driver failures so callers can react to
/// duplicate keys without string-matching engine messages.
#[derive(Debug)]
pub(super) struct ConstraintViolationError {
    pub(super) source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl std::error::Error for ConstraintViolationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "constraint violation: {}", self.source)
    }
}

impl Error {
    /// Creates a constraint violation error wrapping the engine's error.
    pub fn constraint_violation(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::ConstraintViolation(
            ConstraintViolationError {
                source: Box::new(source),
            },
        ))
    }

    /// Returns `true` if this error is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConstraintViolation(_))
    }
}
