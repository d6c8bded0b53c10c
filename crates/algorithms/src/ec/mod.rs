//! Elliptic curve primitives
//!
//! Generic prime-field short Weierstrass arithmetic (y² = x³ + a·x + b):
//!
//! - [`field`]: 𝔽ₚ operations and the extended-Euclid modular inverse
//! - [`point`]: affine addition and doubling with an explicit identity
//! - [`mul`]: left-to-right double-and-add scalar multiplication
//! - [`curve`]: validated, immutable curve parameters
//! - [`scalar`]: range-checked scalars that zeroize on drop
//! - [`encoding`]: fixed-width big-endian hex

pub mod curve;
pub mod encoding;
pub mod field;
pub mod mul;
pub mod point;
pub mod scalar;

pub use curve::CurveParameters;
pub use encoding::{uint_from_hex, uint_to_hex};
pub use field::{modular_inverse, PrimeField};
pub use mul::{multiply, multiply_base};
pub use point::CurvePoint;
pub use scalar::Scalar;

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar, curve: &CurveParameters) -> Result<CurvePoint> {
    multiply_base(curve, scalar.as_uint())
}

/// General scalar multiplication: compute scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &CurvePoint, curve: &CurveParameters) -> Result<CurvePoint> {
    point.mul(scalar, curve)
}

/// Generate a node key pair (d, d·G) with d uniform in [1, N − 1]
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: &CurveParameters,
    rng: &mut R,
) -> Result<(Scalar, CurvePoint)> {
    let private = Scalar::random(curve, rng)?;
    let public = scalar_mult_base_g(&private, curve)?;
    Ok((private, public))
}
