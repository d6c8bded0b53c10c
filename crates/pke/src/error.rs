//! Error handling for rekey operations.

use core::fmt;
use ecrekey_algorithms::error::Error as PrimitiveError;
use ecrekey_api::error::Error as CoreError;

/// Error type for rekey operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside the curve arithmetic
    Primitive(PrimitiveError),
    /// Failure reported by a collaborator through the public error type
    Api(CoreError),
    /// Key record is malformed or describes an unusable point
    KeyParse(&'static str),
    /// Key record could not be obtained at all
    KeySource(String),
    /// A configured random range is unusable for the curve
    RandomRange(&'static str),
    /// Receiver-side recovery or handoff decoding failed
    Recovery(&'static str),
    /// The transport refused the rekey tuple
    Transport(CoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Rekey primitive error: {}", e),
            Error::Api(e) => write!(f, "Rekey API error: {}", e),
            Error::KeyParse(reason) => write!(f, "Invalid key record: {}", reason),
            Error::KeySource(reason) => write!(f, "Key record unavailable: {}", reason),
            Error::RandomRange(reason) => write!(f, "Invalid scalar range: {}", reason),
            Error::Recovery(reason) => write!(f, "Rekey recovery failed: {}", reason),
            Error::Transport(e) => write!(f, "Rekey transport failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) | Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from rekey Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::KeyParse(reason) => CoreError::KeyParse {
                context: "public key loader",
                message: reason.to_string(),
            },
            Error::KeySource(reason) => CoreError::KeyParse {
                context: "key source",
                message: reason,
            },
            Error::RandomRange(reason) => CoreError::InvalidScalar {
                context: "scalar source",
                message: reason.to_string(),
            },
            Error::Recovery(reason) => CoreError::Other {
                context: "rekey recovery",
                message: reason.to_string(),
            },
            Error::Transport(e @ CoreError::Transport { .. }) => e,
            Error::Transport(e) => CoreError::Transport {
                context: "rekey transport",
                message: e.to_string(),
            },
        }
    }
}

/// Result type for rekey operations.
pub type Result<T> = core::result::Result<T, Error>;
