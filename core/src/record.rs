/// Device records — static description plus owned backing storage.
///
/// All storage lives inside the record, allocated once when the registry is
/// built; there are no module-level mutable buffers anywhere in the crate.
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use spin::{Mutex, MutexGuard};

use crate::access::Permission;
use crate::error::DeviceError;

/// Construction-time description of one device.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Backing storage size in bytes. Must be nonzero.
    pub capacity: usize,
    /// Access policy, fixed for the device's lifetime.
    pub permission: Permission,
    /// Informational serial identity. Uniqueness recommended, not enforced.
    pub serial: String,
}

impl DeviceConfig {
    /// Reject configurations the registry must never hold.
    pub fn validate(&self) -> Result<(), DeviceError> {
        if self.capacity == 0 {
            return Err(DeviceError::InvalidArgument);
        }
        Ok(())
    }
}

/// One logical device: owned storage, fixed capacity, fixed policy.
///
/// The storage mutex serializes overlapping transfers from different
/// sessions on the same device; positions stay per-session.
#[derive(Debug)]
pub struct DeviceRecord {
    storage: Mutex<Box<[u8]>>,
    capacity: usize,
    permission: Permission,
    serial: String,
}

impl DeviceRecord {
    /// Build a record from a validated config, allocating zeroed storage.
    pub(crate) fn build(config: DeviceConfig) -> Self {
        Self {
            storage: Mutex::new(vec![0u8; config.capacity].into_boxed_slice()),
            capacity: config.capacity,
            permission: config.permission,
            serial: config.serial,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub(crate) fn storage(&self) -> MutexGuard<'_, Box<[u8]>> {
        self.storage.lock()
    }
}
