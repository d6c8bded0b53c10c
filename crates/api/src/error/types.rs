//! Error type definitions for rekey operations

/// Primary error type for ecrekey operations.
///
/// Every variant aborts the operation that produced it; no partial
/// ciphertext or session key is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A scalar was zero, not below the group order, or drawn from an
    /// invalid range
    #[error("invalid scalar in {context}: {message}")]
    InvalidScalar {
        context: &'static str,
        message: String,
    },

    /// A key record was missing, malformed or described an off-curve point
    #[error("key record rejected by {context}: {message}")]
    KeyParse {
        context: &'static str,
        message: String,
    },

    /// A modular inverse was requested for operands that are not coprime
    #[error("arithmetic failure in {context}: {message}")]
    Arithmetic {
        context: &'static str,
        message: String,
    },

    /// Curve parameters or protocol configuration are unusable
    #[error("invalid parameter for {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Encoded value has the wrong length
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The external transport refused the rekey tuple
    #[error("transport failure in {context}: {message}")]
    Transport {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidScalar,
    KeyParse,
    Arithmetic,
    InvalidParameter,
    InvalidLength,
    Transport,
    Other,
}

/// Result type for rekey operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidScalar { .. } => ErrorKind::InvalidScalar,
            Self::KeyParse { .. } => ErrorKind::KeyParse,
            Self::Arithmetic { .. } => ErrorKind::Arithmetic,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidScalar { message, .. } => Self::InvalidScalar { context, message },
            Self::KeyParse { message, .. } => Self::KeyParse { context, message },
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Transport { message, .. } => Self::Transport { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidScalar { context, .. } => Self::InvalidScalar { context, message },
            Self::KeyParse { context, .. } => Self::KeyParse { context, message },
            Self::Arithmetic { context, .. } => Self::Arithmetic { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            // Length errors carry structured data instead of a message
            err @ Self::InvalidLength { .. } => err,
            Self::Transport { context, .. } => Self::Transport { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// Is this one of the failures raised by the arithmetic core
    /// (scalar range, key record, modular inverse)?
    pub fn is_core_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidScalar | ErrorKind::KeyParse | ErrorKind::Arithmetic
        )
    }
}
