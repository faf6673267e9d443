//! # licrypt
//!
//! Device-bound license issuance and verification toolkit.
//!
//! A private authority signs a device-specific signature string with the
//! GOST R 34.10-2012 elliptic-curve scheme (GOST R 34.11-94 hashing over
//! the GOST 28147-89 cipher) and persists the certificate into a JSON
//! license descriptor; a verifier re-checks it with a public key. A
//! companion channel encrypts small JSON query responses with
//! Triple-DES CBC under a hex-encoded keyset, wrapped in base64.
//!
//! ## Crate structure
//!
//! This is a facade crate re-exporting the member crates:
//!
//! - [`licrypt-api`]: error types and trait seams
//! - [`licrypt-algorithms`]: cipher, hash, curve arithmetic, codecs
//! - [`licrypt-sign`]: the GOST R 34.10-2012 signer
//! - [`licrypt-license`]: descriptor persistence and the query codec

#![forbid(unsafe_code)]

pub use licrypt_api as api;
pub use licrypt_algorithms as algorithms;
pub use licrypt_license as license;
pub use licrypt_sign as sign;

/// Common imports for licrypt users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Trait seams
    pub use crate::algorithms::{BlockCipher, HashFunction};
    pub use crate::api::Signature;

    // The concrete scheme and its wire types
    pub use crate::sign::{
        check_sign, generate_key_pair, sign_message, Gost3410, KeyPair, PublicKey, SecretKey,
    };

    // Descriptor persistence and the query channel
    pub use crate::license::{
        load_certificate, store_certificate, FrameCodec, QueryResponder, TripleDesKeyset,
    };
}
