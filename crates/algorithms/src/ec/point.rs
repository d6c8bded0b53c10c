//! Affine curve points and the group law

use super::curve::CurveParameters;
use super::encoding::uint_to_hex;
use super::mul::multiply;
use super::scalar::Scalar;
use crate::error::{Error, Result};
use crypto_bigint::U256;

/// A point on a short Weierstrass curve: affine coordinates or the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurvePoint {
    /// The point at infinity, the additive identity
    Infinity,
    /// An affine point (x, y) with both coordinates in [0, p − 1]
    Finite {
        /// x-coordinate
        x: U256,
        /// y-coordinate
        y: U256,
    },
}

impl CurvePoint {
    /// Affine point from raw coordinates. No curve check is made; use
    /// [`CurveParameters::validate_point`] for untrusted input.
    pub const fn new(x: U256, y: U256) -> Self {
        CurvePoint::Finite { x, y }
    }

    /// The identity (point at infinity)
    pub const fn identity() -> Self {
        CurvePoint::Infinity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<&U256> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Finite { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<&U256> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Finite { y, .. } => Some(y),
        }
    }

    /// Coordinates as fixed-width hex strings.
    ///
    /// The identity has no affine coordinates and is rejected.
    pub fn to_hex(&self, curve: &CurveParameters) -> Result<(String, String)> {
        match self {
            CurvePoint::Infinity => Err(Error::param(
                "curve point",
                "identity has no affine coordinates",
            )),
            CurvePoint::Finite { x, y } => {
                let width = curve.coordinate_hex_width();
                Ok((uint_to_hex(x, width)?, uint_to_hex(y, width)?))
            }
        }
    }

    /// −P
    pub fn negate(&self, curve: &CurveParameters) -> Self {
        match self {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Finite { x, y } => CurvePoint::Finite {
                x: *x,
                y: curve.field().neg(y),
            },
        }
    }

    /// Add two points (group law)
    ///
    /// Distinct finite points use the chord slope
    /// λ = (y₂ − y₁)/(x₂ − x₁). Equal points are doubled, and P + (−P)
    /// is the identity.
    pub fn add(&self, other: &Self, curve: &CurveParameters) -> Result<Self> {
        let (x1, y1, x2, y2) = match (self, other) {
            (CurvePoint::Infinity, _) => return Ok(*other),
            (_, CurvePoint::Infinity) => return Ok(*self),
            (CurvePoint::Finite { x: x1, y: y1 }, CurvePoint::Finite { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 {
            // Same x: either the same point or its negation
            return if y1 == y2 {
                self.double(curve)
            } else {
                Ok(CurvePoint::Infinity)
            };
        }

        let f = curve.field();
        let slope = f.mul(&f.sub(y2, y1), &f.invert(&f.sub(x2, x1))?);
        let x3 = f.sub(&f.sub(&f.square(&slope), x1), x2);
        let y3 = f.sub(&f.mul(&slope, &f.sub(x1, &x3)), y1);
        Ok(CurvePoint::Finite { x: x3, y: y3 })
    }

    /// Double this point: 2P
    ///
    /// Tangent slope λ = (3x² + a)/(2y); a point with y = 0 has order two
    /// and doubles to the identity.
    pub fn double(&self, curve: &CurveParameters) -> Result<Self> {
        let (x, y) = match self {
            CurvePoint::Infinity => return Ok(CurvePoint::Infinity),
            CurvePoint::Finite { x, y } => (x, y),
        };
        if *y == U256::ZERO {
            return Ok(CurvePoint::Infinity);
        }

        let f = curve.field();
        let numerator = f.add(&f.mul_small(&f.square(x), 3), curve.a());
        let denominator = f.add(y, y);
        let slope = f.mul(&numerator, &f.invert(&denominator)?);
        let x3 = f.sub(&f.square(&slope), &f.add(x, x));
        let y3 = f.sub(&f.mul(&slope, &f.sub(x, &x3)), y);
        Ok(CurvePoint::Finite { x: x3, y: y3 })
    }

    /// P − Q
    pub fn sub(&self, other: &Self, curve: &CurveParameters) -> Result<Self> {
        self.add(&other.negate(curve), curve)
    }

    /// Scalar multiplication: scalar · P
    pub fn mul(&self, scalar: &Scalar, curve: &CurveParameters) -> Result<Self> {
        multiply(curve, self, scalar.as_uint())
    }
}
