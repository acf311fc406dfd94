use super::Error;

/// Error when an operation requires a persisted identity but the record's
/// identity field is empty.
#[derive(Debug)]
pub(super) struct MissingIdentityError {
    pub(super) operation: Box<str>,
}

impl std::error::Error for MissingIdentityError {}

impl core::fmt::Display for MissingIdentityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot {} records with no id", self.operation)
    }
}

impl Error {
    /// Creates a missing identity error for the named operation.
    pub fn missing_identity(operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentityError {
            operation: operation.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing identity error.
    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentity(_))
    }
}
