//! GOST R 34.10-2012 signing for device-bound license certificates

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod gost3410;

pub use gost3410::{
    check_sign, generate_key_pair, generate_key_pair_with_rng, sign_message,
    sign_message_with_rng, Gost3410, KeyPair, PublicKey, SecretKey,
};
