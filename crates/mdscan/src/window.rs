//! Byte-accurate rolling window over the last few bytes of a stream

use crate::signature::{SIGNATURE_LEN, Signature};

/// Shift register holding the most recent bytes in file order.
#[derive(Debug, Clone, Default)]
pub struct RollingWindow {
    bytes: [u8; SIGNATURE_LEN],
    filled: usize,
}

impl RollingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift in one byte, dropping the oldest
    pub fn push(&mut self, byte: u8) {
        self.bytes.copy_within(1.., 0);
        self.bytes[SIGNATURE_LEN - 1] = byte;
        if self.filled < SIGNATURE_LEN {
            self.filled += 1;
        }
    }

    /// True once a full window has been seen and it equals `signature`
    pub fn matches(&self, signature: &Signature) -> bool {
        self.filled == SIGNATURE_LEN && &self.bytes == signature.bytes()
    }
}
