//! Triple-DES CBC frame codec
//!
//! A payload travels as `LE-u64(len) || payload || pad`, padded to a
//! whole number of 8-byte blocks with bytes equal to the pad count (a
//! full block of 8s when already aligned), then DES-EDE3-CBC encrypted
//! under the parsed keyset. Encryption immediately decrypts its own
//! output with a fresh IV and compares; a mismatch means a bug in the
//! codec, not bad input. Base64 wrappers produce the transport form.

use byteorder::{ByteOrder, LittleEndian};
use des::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use des::Des;

use licrypt_algorithms::codec::base64;
use licrypt_algorithms::error::validate;
use licrypt_api::{Error, Result};

use crate::keyset::TripleDesKeyset;

const DES_BLOCK: usize = 8;

/// DES-EDE3-CBC codec with the length-prefixed padded frame layout
pub struct FrameCodec {
    d1: Des,
    d2: Des,
    d3: Des,
    iv: [u8; DES_BLOCK],
}

impl FrameCodec {
    /// Build a codec from a parsed keyset
    pub fn new(keyset: &TripleDesKeyset) -> Self {
        FrameCodec {
            d1: Des::new(GenericArray::from_slice(&keyset.k1)),
            d2: Des::new(GenericArray::from_slice(&keyset.k2)),
            d3: Des::new(GenericArray::from_slice(&keyset.k3)),
            iv: keyset.iv,
        }
    }

    /// EDE3-CBC encrypt `data` in place; the length must already be a
    /// whole number of blocks
    fn cbc_encrypt(&self, data: &mut [u8]) {
        let mut prev = self.iv;
        for chunk in data.chunks_mut(DES_BLOCK) {
            for (b, p) in chunk.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            let block = GenericArray::from_mut_slice(chunk);
            self.d1.encrypt_block(block);
            self.d2.decrypt_block(block);
            self.d3.encrypt_block(block);
            prev.copy_from_slice(chunk);
        }
    }

    /// EDE3-CBC decrypt `data` in place
    fn cbc_decrypt(&self, data: &mut [u8]) {
        let mut prev = self.iv;
        for chunk in data.chunks_mut(DES_BLOCK) {
            let mut current = [0u8; DES_BLOCK];
            current.copy_from_slice(chunk);
            let block = GenericArray::from_mut_slice(chunk);
            self.d3.decrypt_block(block);
            self.d2.encrypt_block(block);
            self.d1.decrypt_block(block);
            for (b, p) in chunk.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            prev = current;
        }
    }

    /// Frame and encrypt `plaintext`.
    ///
    /// The ciphertext is decrypted again with a fresh IV and compared to
    /// the frame before being returned.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut frame = Vec::with_capacity(plaintext.len() + 2 * DES_BLOCK);
        let mut len_prefix = [0u8; 8];
        LittleEndian::write_u64(&mut len_prefix, plaintext.len() as u64);
        frame.extend_from_slice(&len_prefix);
        frame.extend_from_slice(plaintext);

        let pad = DES_BLOCK - (frame.len() % DES_BLOCK);
        frame.resize(frame.len() + pad, pad as u8);

        let mut ciphertext = frame.clone();
        self.cbc_encrypt(&mut ciphertext);

        let mut check = ciphertext.clone();
        self.cbc_decrypt(&mut check);
        if check != frame {
            return Err(Error::IntegrityFailure {
                context: "3des frame self-check",
            });
        }

        Ok(ciphertext)
    }

    /// Decrypt a frame and strip the padding and length prefix
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::parameter(
            !ciphertext.is_empty(),
            "3des ciphertext",
            "ciphertext is empty",
        )
        .map_err(Error::from)?;
        validate::multiple_of("3des ciphertext", ciphertext.len(), DES_BLOCK)
            .map_err(Error::from)?;

        let mut frame = ciphertext.to_vec();
        self.cbc_decrypt(&mut frame);

        let pad = *frame.last().unwrap_or(&0) as usize;
        if pad == 0 || pad > DES_BLOCK {
            return Err(Error::InvalidParameter {
                context: "3des frame",
                message: "bad padding byte".to_string(),
            });
        }
        if !frame[frame.len() - pad..].iter().all(|&b| b as usize == pad) {
            return Err(Error::InvalidParameter {
                context: "3des frame",
                message: "inconsistent padding".to_string(),
            });
        }
        frame.truncate(frame.len() - pad);

        if frame.len() < 8 {
            return Err(Error::InvalidParameter {
                context: "3des frame",
                message: "missing length prefix".to_string(),
            });
        }
        let declared = LittleEndian::read_u64(&frame[..8]) as usize;
        let payload = &frame[8..];
        if declared != payload.len() {
            return Err(Error::InvalidParameter {
                context: "3des frame",
                message: format!(
                    "declared length {} does not match payload length {}",
                    declared,
                    payload.len()
                ),
            });
        }

        Ok(payload.to_vec())
    }

    /// Encrypt and wrap in base64 for transport
    pub fn encrypt_to_base64(&self, plaintext: &[u8]) -> Result<String> {
        Ok(base64::encode(&self.encrypt(plaintext)?))
    }

    /// Unwrap base64 and decrypt
    pub fn decrypt_from_base64(&self, payload: &str) -> Result<Vec<u8>> {
        let ciphertext = base64::decode(payload).map_err(Error::from)?;
        self.decrypt(&ciphertext)
    }
}
