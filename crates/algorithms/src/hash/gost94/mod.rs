//! GOST R 34.11-94 256-bit hash
//!
//! Built on the GOST 28147-89 cipher: each 32-byte block drives a step
//! transformation that derives four round keys from the chaining value
//! and the message block (A/P mixing), encrypts the four 8-byte slices of
//! the chaining value under them, and folds the result back through the
//! 16-bit-word linear transformation psi (12 rounds inside, 61 rounds to
//! close). Finalization appends a bit-length block L and the running
//! modulo-2^256 block sum Z.
//!
//! The cipher context embedded here is scheduled once with the default
//! S-box set and re-keyed for every slice.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use super::HashFunction;
use crate::block::gost89::{Gost89, GOST89_KEY_SIZE};
use crate::block::BlockCipher;
use crate::error::{Error, Result};

/// Digest size in bytes (256 bits)
pub const GOST94_OUTPUT_SIZE: usize = 32;
/// Block size in bytes (256 bits)
pub const GOST94_BLOCK_SIZE: usize = 32;

/// Key-derivation constant C2; C1 and C3 are all-zero.
///
/// Little-endian words FF00FF00 FF00FF00 00FF00FF 00FF00FF
///                     00FFFF00 FF0000FF 000000FF FF00FFFF.
const C2: [u8; 32] = [
    0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, //
    0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, //
    0x00, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0xFF, //
    0xFF, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0xFF,
];

/// GOST R 34.11-94 hash context
#[derive(Clone)]
pub struct Gost94 {
    buffer: [u8; GOST94_BLOCK_SIZE],
    buffer_idx: usize,
    /// Running bit count, low word first
    datalen: [u32; 2],
    h: [u8; 32],
    z: [u8; 32],
    cipher: Gost89,
    finalized: bool,
}

impl Zeroize for Gost94 {
    fn zeroize(&mut self) {
        self.buffer.zeroize();
        self.h.zeroize();
        self.z.zeroize();
        self.datalen.zeroize();
        // the embedded cipher zeroizes through its own impl
        self.cipher.zeroize();
    }
}

impl Drop for Gost94 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// A-transformation: fold the low 8 bytes into the vacated top slot while
/// shifting the remaining 24 bytes down
fn a_transform(x: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..24].copy_from_slice(&x[8..]);
    for i in 0..8 {
        out[24 + i] = x[i] ^ x[8 + i];
    }
    out
}

/// P-permutation: dst[4i + k - 1] = src[8(k - 1) + i]
fn p_transform(x: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..8 {
        for k in 1..=4 {
            out[4 * i + k - 1] = x[8 * (k - 1) + i];
        }
    }
    out
}

/// One round of the psi LFSR over 16 little-endian 16-bit words
fn phi(b: &mut [u8; 32]) {
    let mut w = [0u16; 16];
    for (i, word) in w.iter_mut().enumerate() {
        *word = LittleEndian::read_u16(&b[2 * i..2 * i + 2]);
    }
    let fold = w[0] ^ w[1] ^ w[2] ^ w[3] ^ w[12] ^ w[15];
    for i in 0..15 {
        w[i] = w[i + 1];
    }
    w[15] = fold;
    for (i, word) in w.iter().enumerate() {
        LittleEndian::write_u16(&mut b[2 * i..2 * i + 2], *word);
    }
}

fn phi_pow(b: &mut [u8; 32], rounds: usize) {
    for _ in 0..rounds {
        phi(b);
    }
}

fn xor32(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..32 {
        out[i] = a[i] ^ b[i];
    }
    out
}

impl Gost94 {
    /// Derive the four 32-byte round keys for one step
    fn generate_keys(h: &[u8; 32], m: &[u8; 32]) -> [[u8; GOST89_KEY_SIZE]; 4] {
        let mut keys = [[0u8; GOST89_KEY_SIZE]; 4];
        let mut u = *h;
        let mut v = *m;

        keys[0] = p_transform(&xor32(&u, &v));

        for j in 1..4 {
            u = a_transform(&u);
            if j == 2 {
                u = xor32(&u, &C2);
            }
            v = a_transform(&a_transform(&v));
            keys[j] = p_transform(&xor32(&u, &v));
        }
        keys
    }

    /// The step transformation H_{i} = Step(H_{i-1}, M_i)
    fn step(&mut self, m: &[u8; 32]) -> Result<()> {
        let keys = Self::generate_keys(&self.h, m);

        // Encryption stage: S_j = E_{K_j}(H_j) slice by slice
        let mut s = [0u8; 32];
        for j in 0..4 {
            self.cipher.rekey(&keys[j]);
            let mut block = [0u8; 8];
            block.copy_from_slice(&self.h[8 * j..8 * j + 8]);
            self.cipher.encrypt_block(&mut block)?;
            s[8 * j..8 * j + 8].copy_from_slice(&block);
        }

        // Mixing stage: H' = phi^61( phi(M ^ phi^12(S)) ^ H )
        phi_pow(&mut s, 12);
        let mut t = xor32(m, &s);
        phi(&mut t);
        t = xor32(&t, &self.h);
        phi_pow(&mut t, 61);
        self.h = t;
        Ok(())
    }

    /// Fold one full message block: Z <- Z + M (mod 2^256), then the step
    /// transformation
    fn block_transform(&mut self, m: &[u8; 32]) -> Result<()> {
        let mut carry = 0u64;
        for i in 0..8 {
            let a = LittleEndian::read_u32(&self.z[4 * i..4 * i + 4]) as u64;
            let b = LittleEndian::read_u32(&m[4 * i..4 * i + 4]) as u64;
            let sum = a + b + carry;
            LittleEndian::write_u32(&mut self.z[4 * i..4 * i + 4], sum as u32);
            carry = sum >> 32;
        }
        self.step(m)
    }
}

impl HashFunction for Gost94 {
    type Output = [u8; GOST94_OUTPUT_SIZE];

    const OUTPUT_SIZE: usize = GOST94_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = GOST94_BLOCK_SIZE;

    fn new() -> Self {
        Gost94 {
            buffer: [0u8; GOST94_BLOCK_SIZE],
            buffer_idx: 0,
            datalen: [0u32; 2],
            h: [0u8; 32],
            z: [0u8; 32],
            // the default S-box set and an all-zero key; every step
            // re-keys before encrypting
            cipher: Gost89::new(&[0u8; GOST89_KEY_SIZE], None).expect("fixed key size"),
            finalized: false,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        if self.finalized {
            return Err(Error::State {
                context: "gost94 update",
                details: "context already finalized",
            });
        }

        // 64-bit bit counter kept as two little-endian u32 halves
        let count = ((self.datalen[1] as u64) << 32) | self.datalen[0] as u64;
        let count = count.wrapping_add((data.len() as u64) << 3);
        self.datalen[0] = count as u32;
        self.datalen[1] = (count >> 32) as u32;

        let mut input = data;
        while !input.is_empty() {
            let take = (GOST94_BLOCK_SIZE - self.buffer_idx).min(input.len());
            self.buffer[self.buffer_idx..self.buffer_idx + take].copy_from_slice(&input[..take]);
            self.buffer_idx += take;
            input = &input[take..];

            if self.buffer_idx == GOST94_BLOCK_SIZE {
                let block = self.buffer;
                self.block_transform(&block)?;
                self.buffer_idx = 0;
            }
        }
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        if self.finalized {
            return Err(Error::State {
                context: "gost94 finalize",
                details: "context already finalized",
            });
        }

        if self.buffer_idx > 0 {
            for b in self.buffer[self.buffer_idx..].iter_mut() {
                *b = 0;
            }
            let block = self.buffer;
            self.block_transform(&block)?;
            self.buffer_idx = 0;
        }

        // Close with the bit-length block and the running sum
        let mut l = [0u8; 32];
        LittleEndian::write_u32(&mut l[0..4], self.datalen[0]);
        LittleEndian::write_u32(&mut l[4..8], self.datalen[1]);
        self.step(&l)?;

        let z = self.z;
        self.step(&z)?;

        self.finalized = true;
        Ok(self.h)
    }
}
