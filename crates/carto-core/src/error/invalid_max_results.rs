use super::Error;

/// Error when a page size is negative.
#[derive(Debug)]
pub(super) struct InvalidMaxResultsError {
    pub(super) given: i64,
}

impl std::error::Error for InvalidMaxResultsError {}

impl core::fmt::Display for InvalidMaxResultsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid maximum results `{}`", self.given)
    }
}

impl Error {
    /// Creates an invalid maximum results error.
    pub fn invalid_max_results(given: i64) -> Error {
        Error::from(super::ErrorKind::InvalidMaxResults(InvalidMaxResultsError {
            given,
        }))
    }

    /// Returns `true` if this error is an invalid maximum results error.
    pub fn is_invalid_max_results(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMaxResults(_))
    }
}
