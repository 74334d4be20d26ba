/// Error type shared by every device operation.
///
/// Every failing branch produces exactly one of these, synchronously, to the
/// immediate caller. Nothing is retried internally; retry policy belongs to
/// the host. A read that returns 0 bytes at end-of-device is success and is
/// never reported through this type.
use embedded_io::ErrorKind;

/// Why a device operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// No device at the requested registry index.
    NotFound,
    /// Malformed request: unrecognized whence value or a zero-capacity
    /// device configuration.
    InvalidArgument,
    /// Access mode incompatible with the device's permission policy, or an
    /// operation the session's own mode does not cover.
    PermissionDenied,
    /// Seek target outside `[0, capacity]`.
    OutOfRange,
    /// Write requested with zero bytes of effective capacity.
    NoSpace,
    /// The caller-side buffer copy failed.
    Fault,
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceError::NotFound => write!(f, "no such device"),
            DeviceError::InvalidArgument => write!(f, "invalid argument"),
            DeviceError::PermissionDenied => write!(f, "permission denied"),
            DeviceError::OutOfRange => write!(f, "seek target out of range"),
            DeviceError::NoSpace => write!(f, "no space left on device"),
            DeviceError::Fault => write!(f, "caller buffer fault"),
        }
    }
}

impl core::error::Error for DeviceError {}

impl embedded_io::Error for DeviceError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeviceError::NotFound => ErrorKind::NotFound,
            DeviceError::InvalidArgument => ErrorKind::InvalidInput,
            DeviceError::PermissionDenied => ErrorKind::PermissionDenied,
            DeviceError::OutOfRange => ErrorKind::InvalidInput,
            // A full device reports as an allocation failure, not EOF.
            DeviceError::NoSpace => ErrorKind::OutOfMemory,
            DeviceError::Fault => ErrorKind::Other,
        }
    }
}
