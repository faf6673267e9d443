//! Hash function implementations

use crate::error::Result;

pub mod gost94;

/// Common interface for incremental hash functions
pub trait HashFunction: Sized {
    /// Digest output type
    type Output: AsRef<[u8]>;

    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Creates a fresh context
    fn new() -> Self;

    /// Absorbs `data`; may be called any number of times before
    /// [`HashFunction::finalize`]
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Consumes the remaining buffered input and emits the digest.
    ///
    /// The context is not reusable afterwards without a re-init.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// One-shot convenience digest
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut ctx = Self::new();
        ctx.update(data)?;
        ctx.finalize()
    }
}
