//! Block cipher implementations

use crate::error::Result;

pub mod gost89;

/// Common interface for block ciphers operating on fixed-size blocks
pub trait BlockCipher {
    /// Block size in bytes
    fn block_size() -> usize;

    /// Encrypts a single block in place
    ///
    /// The block must be exactly `block_size()` bytes.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    ///
    /// The block must be exactly `block_size()` bytes.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
