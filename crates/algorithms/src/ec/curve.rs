//! Short Weierstrass curve parameters: y² = x³ + a·x + b over 𝔽ₚ

use std::borrow::Cow;

use super::encoding::uint_from_hex;
use super::field::PrimeField;
use super::mul::multiply;
use super::point::CurvePoint;
use crate::error::{validate, Error, Result};
use crypto_bigint::U256;
use ecrekey_params::traditional::weierstrass::{CurveConstants, NIST_P192, SECP192K1};

/// Immutable domain parameters of a prime-field curve.
///
/// Built once, validated on construction, and then only ever borrowed. The
/// type is `Send + Sync`, so one value can back any number of concurrent
/// rekey operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    name: Cow<'static, str>,
    field: PrimeField,
    order: U256,
    a: U256,
    b: U256,
    generator: CurvePoint,
}

impl CurveParameters {
    /// Validate and assemble a set of curve parameters.
    ///
    /// Checks that p is odd and greater than 3, that a and b are reduced,
    /// that the curve is non-singular (4a³ + 27b² ≢ 0), that the order is at
    /// least 2, and that the generator satisfies the curve equation. The
    /// generator's order is not verified here; see
    /// [`CurveParameters::verify_generator_order`].
    pub fn new<N: Into<Cow<'static, str>>>(
        name: N,
        p: U256,
        order: U256,
        a: U256,
        b: U256,
        generator: (U256, U256),
    ) -> Result<Self> {
        let name = name.into();
        let field = PrimeField::new(p)?;
        validate::parameter(field.contains(&a), "curve a", "not reduced modulo p")?;
        validate::parameter(field.contains(&b), "curve b", "not reduced modulo p")?;
        validate::parameter(order > U256::ONE, "curve order", "must be at least 2")?;

        // 4a³ + 27b²
        let a3 = field.mul(&field.square(&a), &a);
        let b2 = field.square(&b);
        let discriminant = field.add(&field.mul_small(&a3, 4), &field.mul_small(&b2, 27));
        validate::parameter(
            discriminant != U256::ZERO,
            "curve coefficients",
            "curve is singular",
        )?;

        let (g_x, g_y) = generator;
        let curve = Self {
            name,
            field,
            order,
            a,
            b,
            generator: CurvePoint::new(g_x, g_y),
        };
        if !curve.is_on_curve(&curve.generator) {
            return Err(Error::param("curve generator", "not on the curve"));
        }

        tracing::debug!(curve = %curve.name, bits = curve.modulus().bits_vartime(), "curve parameters validated");
        Ok(curve)
    }

    /// Build parameters from a hex constant table.
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        Self::new(
            constants.name,
            uint_from_hex(constants.p)?,
            uint_from_hex(constants.n)?,
            uint_from_hex(constants.a)?,
            uint_from_hex(constants.b)?,
            (uint_from_hex(constants.g_x)?, uint_from_hex(constants.g_y)?),
        )
    }

    /// NIST P-192
    pub fn nist_p192() -> Self {
        Self::from_constants(&NIST_P192).expect("NIST P-192 constants must be valid")
    }

    /// secp192k1
    pub fn secp192k1() -> Self {
        Self::from_constants(&SECP192K1).expect("secp192k1 constants must be valid")
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying prime field
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Field prime p
    pub fn modulus(&self) -> &U256 {
        self.field.modulus()
    }

    /// Order N of the generator
    pub fn order(&self) -> &U256 {
        &self.order
    }

    /// Coefficient a
    pub fn a(&self) -> &U256 {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &U256 {
        &self.b
    }

    /// Generator G
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// Width in hex digits of a fixed-width coordinate on this curve
    pub fn coordinate_hex_width(&self) -> usize {
        2 * self.field.byte_len()
    }

    /// Width in hex digits of a fixed-width scalar on this curve
    pub fn scalar_hex_width(&self) -> usize {
        2 * ((self.order.bits_vartime() + 7) / 8)
    }

    /// Does `point` satisfy y² ≡ x³ + a·x + b (mod p)?
    ///
    /// The point at infinity is on every curve. Coordinates that are not
    /// reduced modulo p are rejected.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Finite { x, y } => {
                if !self.field.contains(x) || !self.field.contains(y) {
                    return false;
                }
                let f = &self.field;
                let lhs = f.square(y);
                let x3 = f.mul(&f.square(x), x);
                let rhs = f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b);
                lhs == rhs
            }
        }
    }

    /// Error unless `point` is on the curve
    pub fn validate_point(&self, point: &CurvePoint, context: &'static str) -> Result<()> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(Error::PointNotOnCurve { context })
        }
    }

    /// Check that (N − 1)·G = −G, i.e. that G has order N.
    ///
    /// Costs one full scalar multiplication, so it is kept out of
    /// [`CurveParameters::new`].
    pub fn verify_generator_order(&self) -> Result<()> {
        let n_minus_one = self.order.wrapping_sub(&U256::ONE);
        let point = multiply(self, &self.generator, &n_minus_one)?;
        if point == self.generator.negate(self) {
            Ok(())
        } else {
            Err(Error::param("curve order", "generator does not have the stated order"))
        }
    }
}
