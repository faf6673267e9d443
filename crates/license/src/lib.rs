//! License descriptor persistence and the encrypted query channel
//!
//! The descriptor is a small JSON file carrying the device certificate in
//! its `NuitrackLicense` field. The query channel answers small
//! JSON-shaped requests with Triple-DES-CBC-encrypted, base64-wrapped
//! payloads under a keyset derived from a 64-hex-digit secret.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod descriptor;
pub mod frame;
pub mod keyset;
pub mod query;

pub use descriptor::{load_certificate, store_certificate, LICENSE_FIELD};
pub use frame::FrameCodec;
pub use keyset::TripleDesKeyset;
pub use query::{QueryRequest, QueryResponder};
