use super::Error;

/// Error when a page offset is negative.
#[derive(Debug)]
pub(super) struct InvalidOffsetError {
    pub(super) given: i64,
}

impl std::error::Error for InvalidOffsetError {}

impl core::fmt::Display for InvalidOffsetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid offset `{}`", self.given)
    }
}

impl Error {
    /// Creates an invalid offset error.
    pub fn invalid_offset(given: i64) -> Error {
        Error::from(super::ErrorKind::InvalidOffset(InvalidOffsetError {
            given,
        }))
    }

    /// Returns `true` if this error is an invalid offset error.
    pub fn is_invalid_offset(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidOffset(_))
    }
}
