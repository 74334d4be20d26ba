/// File-position arithmetic for the three seek origins.
use embedded_io::SeekFrom;

use crate::error::DeviceError;

/// Raw whence encoding as it arrives from a host transport.
const WHENCE_SET: u32 = 0;
const WHENCE_CUR: u32 = 1;
const WHENCE_END: u32 = 2;

/// Decode a raw `(whence, offset)` pair into a seek origin.
///
/// Hosts that receive whence as an integer translate it here before calling
/// `Session::seek`. Anything outside 0/1/2 is `InvalidArgument`; a negative
/// absolute offset is already a target below zero, so it reports as
/// `OutOfRange` without touching a session.
pub fn whence_to_seek(whence: u32, offset: i64) -> Result<SeekFrom, DeviceError> {
    match whence {
        WHENCE_SET => {
            let off = u64::try_from(offset).map_err(|_| DeviceError::OutOfRange)?;
            Ok(SeekFrom::Start(off))
        }
        WHENCE_CUR => Ok(SeekFrom::Current(offset)),
        WHENCE_END => Ok(SeekFrom::End(offset)),
        _ => Err(DeviceError::InvalidArgument),
    }
}

/// Resolve a seek request against the current position and device capacity.
///
/// The candidate must land in `[0, capacity]`; a result equal to `capacity`
/// is legal (one past the last byte, good for an immediate EOF read or a
/// zero-length write). On failure the caller keeps its old position.
pub(crate) fn resolve(
    position: usize,
    capacity: usize,
    pos: SeekFrom,
) -> Result<usize, DeviceError> {
    let candidate = match pos {
        SeekFrom::Start(off) => i128::from(off),
        SeekFrom::Current(off) => position as i128 + i128::from(off),
        SeekFrom::End(off) => capacity as i128 + i128::from(off),
    };

    if candidate < 0 || candidate > capacity as i128 {
        return Err(DeviceError::OutOfRange);
    }

    Ok(candidate as usize)
}
