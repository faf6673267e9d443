//! Error type definitions for the licrypt toolkit

/// Primary error type for license-crypto operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input: wrong-length hex material, non-hex characters,
    /// scalars outside their admissible range, off-curve points, or an
    /// undefined modular inverse
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Human-readable description of the rejection
        message: String,
    },

    /// A buffer does not have the shape an operation requires, e.g. a
    /// ciphertext whose length is not a multiple of the block size or an
    /// update on a finalized hash context
    BufferShape {
        /// Operation that rejected the buffer
        context: &'static str,
        /// What shape was expected
        message: String,
    },

    /// An internal self-check failed; this signals a bug in the toolkit
    /// rather than malformed caller input
    IntegrityFailure {
        /// Self-check that failed
        context: &'static str,
    },

    /// A signature did not verify against the message and public key
    VerifyFailed {
        /// Verification entry point that failed
        context: &'static str,
    },

    /// A file could not be read or written (boundary layers only; the
    /// cryptographic core performs no I/O)
    Io {
        /// Path or operation that failed
        context: &'static str,
        /// Underlying OS error text
        message: String,
    },
}

/// Result type for license-crypto operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::BufferShape { message, .. } => Self::BufferShape { context, message },
            Self::IntegrityFailure { .. } => Self::IntegrityFailure { context },
            Self::VerifyFailed { .. } => Self::VerifyFailed { context },
            Self::Io { message, .. } => Self::Io { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: invalid parameter: {}", context, message)
            }
            Self::BufferShape { context, message } => {
                write!(f, "{}: bad buffer shape: {}", context, message)
            }
            Self::IntegrityFailure { context } => {
                write!(f, "{}: internal consistency check failed", context)
            }
            Self::VerifyFailed { context } => {
                write!(f, "{}: signature verification failed", context)
            }
            Self::Io { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            context: "io",
            message: err.to_string(),
        }
    }
}
