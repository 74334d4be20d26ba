/// Transfer engine — clamps a requested byte count to the capacity left at
/// the cursor, performs the copy, and reports how much moved.
///
/// Every transfer crosses one of the two buffer traits. A host bridging
/// real user memory implements them and surfaces copy failures as `Fault`;
/// plain byte slices never fault.
use crate::error::DeviceError;

/// Marker error for a failed caller-side copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

/// Caller-supplied destination for device reads.
pub trait DestBuffer {
    /// Bytes the destination can accept.
    fn capacity(&self) -> usize;

    /// Copy `bytes` into the front of the destination.
    fn fill(&mut self, bytes: &[u8]) -> Result<(), Fault>;
}

/// Caller-supplied source for device writes.
pub trait SrcBuffer {
    /// Bytes the source offers.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the front `dst.len()` bytes of the source into `dst`.
    fn drain(&self, dst: &mut [u8]) -> Result<(), Fault>;
}

impl DestBuffer for [u8] {
    fn capacity(&self) -> usize {
        self.len()
    }

    fn fill(&mut self, bytes: &[u8]) -> Result<(), Fault> {
        self[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

impl SrcBuffer for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn drain(&self, dst: &mut [u8]) -> Result<(), Fault> {
        dst.copy_from_slice(&self[..dst.len()]);
        Ok(())
    }
}

/// Copy out of `storage` at `position`, clamped to the remaining capacity.
///
/// Returns the byte count actually copied; 0 at or past end-of-device is a
/// legitimate EOF, not an error, and performs no copy at all.
pub(crate) fn read_at<D: DestBuffer + ?Sized>(
    storage: &[u8],
    position: usize,
    dest: &mut D,
) -> Result<usize, DeviceError> {
    let remaining = storage.len().saturating_sub(position);
    let count = dest.capacity().min(remaining);
    if count == 0 {
        return Ok(0);
    }

    dest.fill(&storage[position..position + count])
        .map_err(|_| DeviceError::Fault)?;
    Ok(count)
}

/// Copy into `storage` at `position`, clamped to the remaining capacity.
///
/// An effective count of zero — full device, or nothing offered — is
/// `NoSpace`. On a fault the storage range may hold a partial copy; the
/// caller must not advance its cursor.
pub(crate) fn write_at<S: SrcBuffer + ?Sized>(
    storage: &mut [u8],
    position: usize,
    src: &S,
) -> Result<usize, DeviceError> {
    let remaining = storage.len().saturating_sub(position);
    let count = src.len().min(remaining);
    if count == 0 {
        return Err(DeviceError::NoSpace);
    }

    src.drain(&mut storage[position..position + count])
        .map_err(|_| DeviceError::Fault)?;
    Ok(count)
}
