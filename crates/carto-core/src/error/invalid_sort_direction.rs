use super::Error;

/// Error when a sort direction is neither `asc` nor `desc`.
#[derive(Debug)]
pub(super) struct InvalidSortDirectionError {
    pub(super) given: Box<str>,
}

impl std::error::Error for InvalidSortDirectionError {}

impl core::fmt::Display for InvalidSortDirectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid sort direction `{}` (should be 'asc' or 'desc')",
            self.given
        )
    }
}

impl Error {
    /// Creates an invalid sort direction error.
    pub fn invalid_sort_direction(given: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSortDirection(
            InvalidSortDirectionError {
                given: given.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid sort direction error.
    pub fn is_invalid_sort_direction(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSortDirection(_))
    }
}
