//! Triple-DES keyset parsing
//!
//! The shared secret is a string of 64 hex characters: three 8-byte DES
//! keys followed by the 8-byte IV.

use licrypt_api::{Error, Result};
use zeroize::Zeroize;

/// Number of hex characters in a keyset string
pub const KEYSET_HEX_LEN: usize = 64;

/// Parsed Triple-DES keyset: three keys and the initialization vector
#[derive(Clone, Zeroize)]
pub struct TripleDesKeyset {
    /// First DES key
    pub k1: [u8; 8],
    /// Second DES key
    pub k2: [u8; 8],
    /// Third DES key
    pub k3: [u8; 8],
    /// CBC initialization vector
    pub iv: [u8; 8],
}

impl Drop for TripleDesKeyset {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl TripleDesKeyset {
    /// Parse a 64-hex-character secret into keys and IV
    pub fn from_hex(keys_str: &str) -> Result<Self> {
        if keys_str.len() != KEYSET_HEX_LEN {
            return Err(Error::InvalidParameter {
                context: "3des keyset",
                message: format!(
                    "expected {} hex characters, got {}",
                    KEYSET_HEX_LEN,
                    keys_str.len()
                ),
            });
        }
        let bytes = hex::decode(keys_str).map_err(|_| Error::InvalidParameter {
            context: "3des keyset",
            message: "non-hex character".to_string(),
        })?;

        let mut keyset = TripleDesKeyset {
            k1: [0u8; 8],
            k2: [0u8; 8],
            k3: [0u8; 8],
            iv: [0u8; 8],
        };
        keyset.k1.copy_from_slice(&bytes[0..8]);
        keyset.k2.copy_from_slice(&bytes[8..16]);
        keyset.k3.copy_from_slice(&bytes[16..24]);
        keyset.iv.copy_from_slice(&bytes[24..32]);
        Ok(keyset)
    }
}
