use super::Error;

/// Error when a record field is read or written that the schema does not
/// declare.
///
/// This is a caller programming error, not a validation failure: the field
/// name itself is wrong, as opposed to the field's value.
#[derive(Debug)]
pub(super) struct UnknownFieldError {
    pub(super) field: Box<str>,
}

impl std::error::Error for UnknownFieldError {}

impl core::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field `{}`", self.field)
    }
}

impl Error {
    /// Creates an unknown field error for `field`.
    pub fn unknown_field(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownFieldError {
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
