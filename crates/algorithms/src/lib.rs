//! Prime-field elliptic curve primitives
//!
//! This crate provides the arithmetic underneath ecrekey: modular inversion
//! over a prime field, affine point addition and doubling on short Weierstrass
//! curves, and left-to-right double-and-add scalar multiplication.
//!
//! Curve parameters are an explicit, immutable [`ec::CurveParameters`] value
//! passed to every operation. There is no process-wide curve.
//!
//! # Timing
//!
//! The arithmetic here is variable-time: the sequence of point operations
//! follows the bit pattern of the scalar and inversion uses the Euclidean
//! algorithm. It targets the rekeying of low-power nodes, not hostile shared
//! hosts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve implementations
pub mod ec;
pub use ec::{CurveParameters, CurvePoint, PrimeField, Scalar};

/// Re-export of the fixed-width integer used for field elements and scalars
pub use crypto_bigint::U256;
