use super::Error;

/// Error when a page is sorted by a field that does not map directly to a
/// storage column.
///
/// Transform-mapped fields have no single column to emit in an ORDER BY
/// clause, so sorting by them is rejected before any SQL is issued.
#[derive(Debug)]
pub(super) struct UnsortableFieldError {
    pub(super) field: Box<str>,
}

impl std::error::Error for UnsortableFieldError {}

impl core::fmt::Display for UnsortableFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "can only sort by fields that map directly to storage columns; field=`{}`",
            self.field
        )
    }
}

impl Error {
    /// Creates an unsortable field error for `field`.
    pub fn unsortable_field(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsortableField(UnsortableFieldError {
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsortable field error.
    pub fn is_unsortable_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsortableField(_))
    }
}
