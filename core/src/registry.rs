/// Device registry — fixed, ordered set of records resolved by index.
///
/// The registry is built once at startup and torn down as a batch when it
/// drops. The index→record mapping never changes in between.
use alloc::vec::Vec;

use crate::access::{AccessMode, Permission};
use crate::error::DeviceError;
use crate::record::{DeviceConfig, DeviceRecord};
use crate::session::Session;

/// Devices in the stock table.
pub const DEFAULT_DEVICE_COUNT: usize = 4;

/// Capacity of each stock device in bytes.
pub const DEFAULT_DEVICE_CAPACITY: usize = 1024;

static_assertions::const_assert!(DEFAULT_DEVICE_COUNT > 0);
static_assertions::const_assert!(DEFAULT_DEVICE_CAPACITY > 0);

/// Process-wide collection of device records.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: Vec<DeviceRecord>,
}

impl DeviceRegistry {
    /// Build a registry from an ordered set of configs.
    ///
    /// Fails on the first invalid config; records built before the failure
    /// are dropped with their storage.
    pub fn new(configs: impl IntoIterator<Item = DeviceConfig>) -> Result<Self, DeviceError> {
        let mut devices = Vec::new();
        for config in configs {
            config.validate()?;
            devices.push(DeviceRecord::build(config));
        }

        log::debug!("registry initialized with {} devices", devices.len());
        Ok(Self { devices })
    }

    /// The stock table: one read-only, one write-only, two read-write
    /// devices, 1 KiB each.
    pub fn with_default_devices() -> Self {
        const PERMS: [Permission; DEFAULT_DEVICE_COUNT] = [
            Permission::ReadOnly,
            Permission::WriteOnly,
            Permission::ReadWrite,
            Permission::ReadWrite,
        ];

        let devices = PERMS
            .iter()
            .enumerate()
            .map(|(i, &permission)| {
                DeviceRecord::build(DeviceConfig {
                    capacity: DEFAULT_DEVICE_CAPACITY,
                    permission,
                    serial: alloc::format!("PSDEV{}XYZ123", i + 1),
                })
            })
            .collect();

        log::debug!("registry initialized with stock device table");
        Self { devices }
    }

    /// Resolve `index`, gate on the device's policy, and bind a session
    /// with its cursor at zero.
    pub fn open(&self, index: usize, mode: AccessMode) -> Result<Session<'_>, DeviceError> {
        let record = self.devices.get(index).ok_or(DeviceError::NotFound)?;

        if !record.permission().allows(mode) {
            log::warn!(
                "open denied: device {} ({}) is {:?}, requested {:?}",
                index,
                record.serial(),
                record.permission(),
                mode
            );
            return Err(DeviceError::PermissionDenied);
        }

        log::debug!("open: device {} ({}), mode {:?}", index, record.serial(), mode);
        Ok(Session::bind(self, index, mode))
    }

    /// Detach a session from its device. Always succeeds; storage is
    /// untouched.
    pub fn release(session: Session<'_>) {
        session.release();
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Record at `index`, if any. For host enumeration at startup — one
    /// externally visible name per entry.
    pub fn device(&self, index: usize) -> Option<&DeviceRecord> {
        self.devices.get(index)
    }

    /// Iterate records in index order.
    pub fn devices(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.devices.iter()
    }

    pub(crate) fn record(&self, index: usize) -> &DeviceRecord {
        &self.devices[index]
    }
}
