use super::{Error, ErrorKind};

/// A message-only error built from format arguments.
///
/// Used by the `bail!` and `err!` macros for one-off error conditions that
/// do not warrant their own kind.
#[derive(Debug)]
pub(super) struct AdhocError {
    pub(super) message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError {
            message: args.to_string().into(),
        }))
    }
}
