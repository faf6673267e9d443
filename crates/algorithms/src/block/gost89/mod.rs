//! GOST 28147-89 64-bit block cipher
//!
//! 256-bit key split into eight little-endian 32-bit subkeys used in a
//! fixed order across 32 rounds. The eight 4-bit S-boxes are precombined
//! pairwise into four 256-entry tables at schedule time; with the
//! `preshifted-sbox` feature (default) the tables additionally absorb the
//! byte-position shifts so the round function reduces to four lookups,
//! three ORs and a rotate. Both table variants produce identical output.
//!
//! The context is immutable after scheduling. Encrypt runs three forward
//! passes over K\[0..7\] followed by one reverse pass over K\[7..0\];
//! decrypt is one forward pass then three reverse passes.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use super::BlockCipher;
use crate::error::{validate, Result};

mod gamma;
pub use gamma::Gost89Gamma;

/// GOST block size in bytes
pub const GOST89_BLOCK_SIZE: usize = 8;
/// GOST key size in bytes (256 bits)
pub const GOST89_KEY_SIZE: usize = 32;

/// An 8x16-nibble substitution box set, rows k1 (lowest nibble) to k8
pub type Sbox = [[u8; 16]; 8];

/// Default S-box set, the GOST R 34.11-94 test-parameters boxes.
///
/// The hash schedules its per-step cipher with exactly this set, and the
/// cipher falls back to it when the caller supplies none.
pub const DEFAULT_SBOX: Sbox = [
    [
        0x4, 0xA, 0x9, 0x2, 0xD, 0x8, 0x0, 0xE, 0x6, 0xB, 0x1, 0xC, 0x7, 0xF, 0x5, 0x3,
    ],
    [
        0xE, 0xB, 0x4, 0xC, 0x6, 0xD, 0xF, 0xA, 0x2, 0x3, 0x8, 0x1, 0x0, 0x7, 0x5, 0x9,
    ],
    [
        0x5, 0x8, 0x1, 0xD, 0xA, 0x3, 0x4, 0x2, 0xE, 0xF, 0xC, 0x7, 0x6, 0x0, 0x9, 0xB,
    ],
    [
        0x7, 0xD, 0xA, 0x1, 0x0, 0x8, 0x9, 0xF, 0xE, 0x4, 0x6, 0xC, 0xB, 0x2, 0x5, 0x3,
    ],
    [
        0x6, 0xC, 0x7, 0x1, 0x5, 0xF, 0xD, 0x8, 0x4, 0xA, 0x9, 0xE, 0x0, 0x3, 0xB, 0x2,
    ],
    [
        0x4, 0xB, 0xA, 0x0, 0x7, 0x2, 0x1, 0xD, 0x3, 0x6, 0x8, 0x5, 0x9, 0xC, 0xF, 0xE,
    ],
    [
        0xD, 0xB, 0x4, 0x1, 0x3, 0xF, 0x5, 0x9, 0x0, 0xA, 0xE, 0x7, 0x6, 0x8, 0x2, 0xC,
    ],
    [
        0x1, 0xF, 0xD, 0x0, 0x5, 0x7, 0xA, 0x4, 0x9, 0x2, 0x3, 0xE, 0x6, 0xB, 0x8, 0xC,
    ],
];

/// Scheduled GOST 28147-89 cipher context
#[derive(Clone, Zeroize)]
pub struct Gost89 {
    key: [u32; 8],
    k87: [u32; 256],
    k65: [u32; 256],
    k43: [u32; 256],
    k21: [u32; 256],
    preshifted: bool,
}

impl Drop for Gost89 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Gost89 {
    /// Schedule a cipher from a 32-byte key and an optional S-box set.
    ///
    /// `None` selects [`DEFAULT_SBOX`].
    pub fn new(key: &[u8], sbox: Option<&Sbox>) -> Result<Self> {
        Self::with_tables(
            key,
            sbox.unwrap_or(&DEFAULT_SBOX),
            cfg!(feature = "preshifted-sbox"),
        )
    }

    /// Schedule with an explicit table variant; exercised directly by the
    /// equivalence tests.
    pub(crate) fn with_tables(key: &[u8], sbox: &Sbox, preshifted: bool) -> Result<Self> {
        validate::length("gost89 key", key.len(), GOST89_KEY_SIZE)?;

        let mut ctx = Gost89 {
            key: [0u32; 8],
            k87: [0u32; 256],
            k65: [0u32; 256],
            k43: [0u32; 256],
            k21: [0u32; 256],
            preshifted,
        };
        for i in 0..8 {
            ctx.key[i] = LittleEndian::read_u32(&key[4 * i..4 * i + 4]);
        }
        ctx.build_tables(sbox);
        Ok(ctx)
    }

    /// Combine S-box pairs into 256-entry byte tables, optionally fusing
    /// the output byte positions of the 11-bit rotation input.
    fn build_tables(&mut self, sbox: &Sbox) {
        let [k1, k2, k3, k4, k5, k6, k7, k8] = sbox;
        for i in 0..256 {
            self.k87[i] = ((k8[i >> 4] as u32) << 4) | k7[i & 15] as u32;
            self.k65[i] = ((k6[i >> 4] as u32) << 4) | k5[i & 15] as u32;
            self.k43[i] = ((k4[i >> 4] as u32) << 4) | k3[i & 15] as u32;
            self.k21[i] = ((k2[i >> 4] as u32) << 4) | k1[i & 15] as u32;
        }
        if self.preshifted {
            for i in 0..256 {
                self.k87[i] <<= 24;
                self.k65[i] <<= 16;
                self.k43[i] <<= 8;
            }
        }
    }

    /// Replace the scheduled key without rebuilding the S-box tables.
    ///
    /// The hash step transformation re-keys one context per 8-byte slice.
    pub(crate) fn rekey(&mut self, key: &[u8; GOST89_KEY_SIZE]) {
        for i in 0..8 {
            self.key[i] = LittleEndian::read_u32(&key[4 * i..4 * i + 4]);
        }
    }

    /// The GOST round function: combined S-box substitution then an
    /// 11-bit left rotation
    #[inline(always)]
    fn f(&self, x: u32) -> u32 {
        let y = if self.preshifted {
            self.k87[(x >> 24) as usize & 255]
                | self.k65[(x >> 16) as usize & 255]
                | self.k43[(x >> 8) as usize & 255]
                | self.k21[x as usize & 255]
        } else {
            (self.k87[(x >> 24) as usize & 255] << 24)
                | (self.k65[(x >> 16) as usize & 255] << 16)
                | (self.k43[(x >> 8) as usize & 255] << 8)
                | self.k21[x as usize & 255]
        };
        y.rotate_left(11)
    }

    /// One forward key pass, subkeys K[0..7]
    #[inline(always)]
    fn pass_forward(&self, n1: &mut u32, n2: &mut u32) {
        let k = &self.key;
        *n2 ^= self.f(n1.wrapping_add(k[0]));
        *n1 ^= self.f(n2.wrapping_add(k[1]));
        *n2 ^= self.f(n1.wrapping_add(k[2]));
        *n1 ^= self.f(n2.wrapping_add(k[3]));
        *n2 ^= self.f(n1.wrapping_add(k[4]));
        *n1 ^= self.f(n2.wrapping_add(k[5]));
        *n2 ^= self.f(n1.wrapping_add(k[6]));
        *n1 ^= self.f(n2.wrapping_add(k[7]));
    }

    /// One reverse key pass, subkeys K[7..0]
    #[inline(always)]
    fn pass_reverse(&self, n1: &mut u32, n2: &mut u32) {
        let k = &self.key;
        *n2 ^= self.f(n1.wrapping_add(k[7]));
        *n1 ^= self.f(n2.wrapping_add(k[6]));
        *n2 ^= self.f(n1.wrapping_add(k[5]));
        *n1 ^= self.f(n2.wrapping_add(k[4]));
        *n2 ^= self.f(n1.wrapping_add(k[3]));
        *n1 ^= self.f(n2.wrapping_add(k[2]));
        *n2 ^= self.f(n1.wrapping_add(k[1]));
        *n1 ^= self.f(n2.wrapping_add(k[0]));
    }
}

impl BlockCipher for Gost89 {
    fn block_size() -> usize {
        GOST89_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("gost89 block", block.len(), GOST89_BLOCK_SIZE)?;

        let mut n1 = LittleEndian::read_u32(&block[0..4]);
        let mut n2 = LittleEndian::read_u32(&block[4..8]);

        self.pass_forward(&mut n1, &mut n2);
        self.pass_forward(&mut n1, &mut n2);
        self.pass_forward(&mut n1, &mut n2);
        self.pass_reverse(&mut n1, &mut n2);

        // Halves swap on output: n2 first, then n1
        LittleEndian::write_u32(&mut block[0..4], n2);
        LittleEndian::write_u32(&mut block[4..8], n1);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("gost89 block", block.len(), GOST89_BLOCK_SIZE)?;

        let mut n1 = LittleEndian::read_u32(&block[0..4]);
        let mut n2 = LittleEndian::read_u32(&block[4..8]);

        self.pass_forward(&mut n1, &mut n2);
        self.pass_reverse(&mut n1, &mut n2);
        self.pass_reverse(&mut n1, &mut n2);
        self.pass_reverse(&mut n1, &mut n2);

        LittleEndian::write_u32(&mut block[0..4], n2);
        LittleEndian::write_u32(&mut block[4..8], n1);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
