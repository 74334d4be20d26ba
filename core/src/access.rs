/// Permission policy and access-mode flags.
///
/// A device declares one of three policies at construction; a caller
/// declares its read/write intent at open. The two meet exactly once, in
/// `DeviceRegistry::open`.
use bitflags::bitflags;

bitflags! {
    /// Read/write intent requested by a caller at open time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessMode: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const RDWR = Self::READ.bits() | Self::WRITE.bits();
    }
}

/// Access policy fixed at device construction.
///
/// Only these three states exist; the undefined bit patterns of a raw flag
/// encoding are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Permission {
    /// Decide whether an open with `mode` is allowed under this policy.
    pub fn allows(self, mode: AccessMode) -> bool {
        match self {
            Permission::ReadWrite => true,
            Permission::ReadOnly => {
                mode.contains(AccessMode::READ) && !mode.contains(AccessMode::WRITE)
            }
            Permission::WriteOnly => {
                mode.contains(AccessMode::WRITE) && !mode.contains(AccessMode::READ)
            }
        }
    }
}
