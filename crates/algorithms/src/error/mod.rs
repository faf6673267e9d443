//! Error handling for the cryptographic primitives

use std::borrow::Cow;
use std::fmt;

use licrypt_api::Error as ApiError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operation attempted on a context in the wrong state, e.g. an
    /// update on a finalized hash
    State {
        /// Context where the misuse occurred
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Input that failed to decode (bad alphabet, truncated group)
    Decode {
        /// Codec that rejected the input
        context: &'static str,
        /// What was malformed
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::State { context, details } => {
                write!(f, "Invalid state in {}: {}", context, details)
            }
            Error::Decode { context, details } => {
                write!(f, "Decode error in {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(s) => Box::leak(s.into_boxed_str()),
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::BufferShape {
                context,
                message: format!("expected length {}, got {}", expected, actual),
            },
            Error::State { context, details } => ApiError::BufferShape {
                context,
                message: details.to_string(),
            },
            Error::Decode { context, .. } => ApiError::IntegrityFailure { context },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
