use super::Error;

/// Error when a criteria field does not map directly to a storage column.
///
/// Transform-mapped fields cannot be used as filter keys: the engine would
/// have to invert the transform to compare against the stored column value.
#[derive(Debug)]
pub(super) struct UnmappableCriteriaError {
    pub(super) field: Box<str>,
}

impl std::error::Error for UnmappableCriteriaError {}

impl core::fmt::Display for UnmappableCriteriaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "can only filter by fields that map directly to storage columns; field=`{}`",
            self.field
        )
    }
}

impl Error {
    /// Creates an unmappable criteria error for `field`.
    pub fn unmappable_criteria(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappableCriteria(
            UnmappableCriteriaError {
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unmappable criteria error.
    pub fn is_unmappable_criteria(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappableCriteria(_))
    }
}
