/// Sessions — the live state of one open interaction with a device.
use embedded_io::SeekFrom;

use crate::access::AccessMode;
use crate::cursor;
use crate::error::DeviceError;
use crate::record::DeviceRecord;
use crate::registry::DeviceRegistry;
use crate::transfer::{self, DestBuffer, SrcBuffer};

/// One open handle on a device.
///
/// A session borrows the registry and carries the device index it was bound
/// to at open; every operation resolves the record by direct indexing.
/// Independent sessions on the same device share the storage but never the
/// cursor. Consuming the session (`release`) is terminal — reopening means
/// a fresh session with a fresh cursor.
#[derive(Debug)]
pub struct Session<'r> {
    registry: &'r DeviceRegistry,
    index: usize,
    position: usize,
    mode: AccessMode,
}

impl<'r> Session<'r> {
    pub(crate) fn bind(registry: &'r DeviceRegistry, index: usize, mode: AccessMode) -> Self {
        Self {
            registry,
            index,
            position: 0,
            mode,
        }
    }

    fn record(&self) -> &'r DeviceRecord {
        self.registry.record(self.index)
    }

    /// Registry index of the bound device.
    pub fn device_index(&self) -> usize {
        self.index
    }

    /// Current cursor, always within `[0, capacity]`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Access mode fixed at open.
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Read up to `dest.capacity()` bytes at the cursor and advance it.
    ///
    /// Returns the byte count actually copied; 0 signals end-of-device.
    pub fn read<D: DestBuffer + ?Sized>(&mut self, dest: &mut D) -> Result<usize, DeviceError> {
        if !self.mode.contains(AccessMode::READ) {
            return Err(DeviceError::PermissionDenied);
        }

        let record = self.record();
        let storage = record.storage();
        let count = transfer::read_at(&storage, self.position, dest)?;
        self.position += count;

        log::trace!(
            "read: device {} moved {} bytes, position {}",
            self.index,
            count,
            self.position
        );
        Ok(count)
    }

    /// Write up to the remaining capacity at the cursor and advance it.
    pub fn write<S: SrcBuffer + ?Sized>(&mut self, src: &S) -> Result<usize, DeviceError> {
        if !self.mode.contains(AccessMode::WRITE) {
            return Err(DeviceError::PermissionDenied);
        }

        let record = self.record();
        let mut storage = record.storage();
        let count = transfer::write_at(&mut storage, self.position, src)?;
        self.position += count;

        log::trace!(
            "write: device {} moved {} bytes, position {}",
            self.index,
            count,
            self.position
        );
        Ok(count)
    }

    /// Move the cursor; returns the new position. On failure the cursor
    /// stays where it was.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<usize, DeviceError> {
        let capacity = self.record().capacity();
        self.position = cursor::resolve(self.position, capacity, pos)?;

        log::trace!("seek: device {} position {}", self.index, self.position);
        Ok(self.position)
    }

    /// Detach from the device. Bookkeeping only; storage and other
    /// sessions are untouched.
    pub fn release(self) {}
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        log::debug!("release: device {}", self.index);
    }
}
