//! Shared error types and trait seams for the licrypt toolkit.
//!
//! The cryptographic core returns typed errors to its caller without
//! logging or exiting; translation to diagnostics and process exit codes
//! happens in the CLI layer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::Signature;
