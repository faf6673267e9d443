//! Cryptographic engine of the licrypt toolkit
//!
//! This crate implements the primitives the license tooling is built on:
//! the GOST 28147-89 block cipher (ECB and the gamma streaming mode), the
//! GOST R 34.11-94 256-bit hash, affine elliptic-curve arithmetic over a
//! fixed 256-bit prime field, the sign-aware big-integer helpers shared
//! by the curve and the signer, and a base64 codec for transport framing.
//!
//! Contexts are owned values: a cipher or hash context belongs to one
//! caller for its init → update → final lifetime and is not meant to be
//! shared across threads. None of the implementations here attempt
//! constant-time execution.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Big-integer helpers (sign-aware reduction, extended gcd, inverses)
pub mod bigint;

// Elliptic-curve point arithmetic and the fixed curve parameters
pub mod ec;
pub use ec::{CurveParams, CurvePoint};

// Block cipher implementations
pub mod block;
pub use block::gost89::{Gost89, Gost89Gamma, Sbox};
pub use block::BlockCipher;

// Hash function implementations
pub mod hash;
pub use hash::gost94::Gost94;
pub use hash::HashFunction;

// Transport codecs
pub mod codec;
pub use codec::base64;
