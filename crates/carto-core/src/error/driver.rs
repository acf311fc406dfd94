use super::Error;

/// Error when a storage engine operation fails for a reason other than a
/// constraint violation (connection loss, auth failure, malformed row).
///
/// The underlying engine error is propagated unwrapped as the source; this
/// layer does not retry or suppress it.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "driver operation failed: {}", self.source)
    }
}

impl Error {
    /// Creates a driver error wrapping the engine's error.
    pub fn driver(source: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            source: Box::new(source),
        }))
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
