use super::Error;

/// Error when a column mapping is misconfigured.
///
/// This is a configuration error, raised at mapper-definition time or on
/// first use, for instance when a transform function fails to produce a
/// column/value pair.
#[derive(Debug)]
pub(super) struct InvalidColumnMappingError {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidColumnMappingError {}

impl core::fmt::Display for InvalidColumnMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid column mapping: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid column mapping error.
    pub fn invalid_column_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidColumnMapping(
            InvalidColumnMappingError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid column mapping error.
    pub fn is_invalid_column_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidColumnMapping(_))
    }
}
