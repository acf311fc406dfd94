use super::Error;

/// Error when a schema definition is unusable.
///
/// This occurs when:
/// - A schema declares no fields at all
/// - A schema does not declare the identity field
///
/// These are fatal configuration errors, raised when the schema is built,
/// not validation failures.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
