//! Error handling for curve primitives

use std::borrow::Cow;
use std::fmt;

use ecrekey_api::Error as CoreError;

pub mod validate;

/// The error type for curve primitives
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
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Scalar outside [1, n−1]
    InvalidScalar {
        /// Operation that rejected the scalar
        context: &'static str,
        /// Why the scalar was rejected
        reason: &'static str,
    },

    /// Modular inverse requested for operands sharing a factor
    NotInvertible {
        /// Operation that needed the inverse
        context: &'static str,
    },

    /// Coordinates do not satisfy the curve equation
    PointNotOnCurve {
        /// Where the point was checked
        context: &'static str,
    },

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
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

    /// Shorthand to create an InvalidScalar error
    pub fn scalar(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidScalar { context, reason }
    }
}

/// Result type for curve primitive operations
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
            Error::InvalidScalar { context, reason } => {
                write!(f, "Invalid scalar for {}: {}", context, reason)
            }
            Error::NotInvertible { context } => {
                write!(f, "Value has no modular inverse in {}", context)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point not on curve in {}", context)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "curve parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidScalar { context, reason } => CoreError::InvalidScalar {
                context,
                message: reason.to_string(),
            },
            Error::NotInvertible { context } => CoreError::Arithmetic {
                context,
                message: "operands are not coprime".to_string(),
            },
            Error::PointNotOnCurve { context } => CoreError::KeyParse {
                context,
                message: "point does not satisfy the curve equation".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}
