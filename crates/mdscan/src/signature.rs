//! Magic signatures matched against raw bytes

use std::fmt;

/// Linux md raid superblock magic
pub const MD_MAGIC: u32 = 0xa92b4efc;

/// The md magic as it is stored on disk (little endian)
pub const MD_MAGIC_BYTES: [u8; 4] = MD_MAGIC.to_le_bytes();

/// Length of every signature in bytes
pub const SIGNATURE_LEN: usize = 4;

/// A 4-byte magic value in on-disk byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub const fn new(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Signature of an md raid superblock (`FC 4E 2B A9`)
    pub const fn md_raid() -> Self {
        Self(MD_MAGIC_BYTES)
    }

    /// Build a signature from a 32-bit magic stored little endian
    pub const fn from_u32_le(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    pub const fn bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Check whether `data` begins with this signature
    pub fn matches_prefix(&self, data: &[u8]) -> bool {
        data.starts_with(&self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{:02X} {:02X} {:02X} {:02X}", a, b, c, d)
    }
}
