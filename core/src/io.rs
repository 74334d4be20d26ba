/// embedded-io adapters over sessions.
///
/// Hosts that already speak the embedded-io traits can drive a session
/// through them; everything delegates to the inherent operations.
use embedded_io::{ErrorType, Read, Seek, SeekFrom, Write};

use crate::error::DeviceError;
use crate::session::Session;

impl ErrorType for Session<'_> {
    type Error = DeviceError;
}

impl Read for Session<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Session::read(self, buf)
    }
}

impl Write for Session<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        // The trait wants Ok(0) for an empty buffer; only a real transfer
        // hits the NoSpace path.
        if buf.is_empty() {
            return Ok(0);
        }
        Session::write(self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        // RAM-backed storage, nothing buffered.
        Ok(())
    }
}

impl Seek for Session<'_> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        Session::seek(self, pos).map(|p| p as u64)
    }
}
