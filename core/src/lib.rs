#![no_std]

extern crate alloc;

mod access;
mod cursor;
mod error;
mod io;
mod record;
mod registry;
mod session;
mod transfer;

pub use access::{AccessMode, Permission};
pub use cursor::whence_to_seek;
pub use error::DeviceError;
pub use record::{DeviceConfig, DeviceRecord};
pub use registry::{DeviceRegistry, DEFAULT_DEVICE_CAPACITY, DEFAULT_DEVICE_COUNT};
pub use session::Session;
pub use transfer::{DestBuffer, Fault, SrcBuffer};

/// Seek origin, shared with the embedded-io surface.
pub use embedded_io::SeekFrom;
