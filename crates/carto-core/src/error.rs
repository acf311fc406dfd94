mod adhoc;
mod constraint_violation;
mod driver;
mod invalid_column_mapping;
mod invalid_max_results;
mod invalid_offset;
mod invalid_schema;
mod invalid_sort_direction;
mod missing_identity;
mod unknown_criterion;
mod unknown_field;
mod unmappable_criteria;
mod unsortable_field;
mod validation;

use adhoc::AdhocError;
use constraint_violation::ConstraintViolationError;
use driver::DriverError;
use invalid_column_mapping::InvalidColumnMappingError;
use invalid_max_results::InvalidMaxResultsError;
use invalid_offset::InvalidOffsetError;
use invalid_schema::InvalidSchemaError;
use invalid_sort_direction::InvalidSortDirectionError;
use missing_identity::MissingIdentityError;
use unknown_criterion::UnknownCriterionError;
use unknown_field::UnknownFieldError;
use unmappable_criteria::UnmappableCriteriaError;
use unsortable_field::UnsortableFieldError;
pub use validation::ValidationErrors;

use std::sync::Arc;

/// This wraps `anyhow::bail!` and converts the result to our Error type.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// This wraps `anyhow::anyhow!` and converts to our Error type.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Carto.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root
    /// cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::ConstraintViolation(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Anyhow(anyhow::Error),
    ConstraintViolation(ConstraintViolationError),
    Driver(DriverError),
    InvalidColumnMapping(InvalidColumnMappingError),
    InvalidMaxResults(InvalidMaxResultsError),
    InvalidOffset(InvalidOffsetError),
    InvalidSchema(InvalidSchemaError),
    InvalidSortDirection(InvalidSortDirectionError),
    MissingIdentity(MissingIdentityError),
    UnknownCriterion(UnknownCriterionError),
    UnknownField(UnknownFieldError),
    UnmappableCriteria(UnmappableCriteriaError),
    UnsortableField(UnsortableFieldError),
    Validation(ValidationErrors),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            ConstraintViolation(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidColumnMapping(err) => core::fmt::Display::fmt(err, f),
            InvalidMaxResults(err) => core::fmt::Display::fmt(err, f),
            InvalidOffset(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidSortDirection(err) => core::fmt::Display::fmt(err, f),
            MissingIdentity(err) => core::fmt::Display::fmt(err, f),
            UnknownCriterion(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            UnmappableCriteria(err) => core::fmt::Display::fmt(err, f),
            UnsortableField(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown carto error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
