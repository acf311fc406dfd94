use super::Error;

/// Error when a criterion cannot be translated to a WHERE fragment.
///
/// This occurs when:
/// - A criterion carries a non-scalar equality value
/// - An `in` criterion is given an empty list of values
///
/// These are caller programming errors and are rejected before any SQL is
/// issued.
#[derive(Debug)]
pub(super) struct UnknownCriterionError {
    pub(super) field: Box<str>,
    pub(super) message: Box<str>,
}

impl std::error::Error for UnknownCriterionError {}

impl core::fmt::Display for UnknownCriterionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid criterion for `{}`: {}", self.field, self.message)
    }
}

impl Error {
    /// Creates an unknown criterion error for `field`.
    pub fn unknown_criterion(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownCriterion(UnknownCriterionError {
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown criterion error.
    pub fn is_unknown_criterion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownCriterion(_))
    }
}
