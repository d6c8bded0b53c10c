//! Double-and-add scalar multiplication

use super::curve::CurveParameters;
use super::point::CurvePoint;
use crate::error::{validate, Result};
use crypto_bigint::U256;

/// Compute scalar · base.
///
/// Left-to-right double-and-add over the binary expansion of `scalar`, most
/// significant bit first. The accumulator starts at `base`, which consumes
/// the leading 1 bit; every remaining bit doubles the accumulator and, when
/// set, adds `base`. The cost is O(log scalar) point operations and the
/// operation sequence depends on the bit pattern.
///
/// # Errors
/// - [`crate::Error::InvalidScalar`] if `scalar` is 0 or ≥ N
/// - [`crate::Error::PointNotOnCurve`] if `base` is not on `curve`
/// - [`crate::Error::NotInvertible`] if the field modulus is not prime
pub fn multiply(curve: &CurveParameters, base: &CurvePoint, scalar: &U256) -> Result<CurvePoint> {
    validate::scalar_range("scalar multiplication", scalar, curve.order())?;
    curve.validate_point(base, "scalar multiplication")?;
    if base.is_identity() {
        return Ok(CurvePoint::Infinity);
    }

    let mut acc = *base;
    for i in (0..scalar.bits_vartime() - 1).rev() {
        acc = acc.double(curve)?;
        if scalar.bit_vartime(i) {
            acc = acc.add(base, curve)?;
        }
    }
    Ok(acc)
}

/// Compute scalar · G for the curve generator.
pub fn multiply_base(curve: &CurveParameters, scalar: &U256) -> Result<CurvePoint> {
    multiply(curve, curve.generator(), scalar)
}
