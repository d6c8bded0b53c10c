//! Scalars in [1, N − 1]

use core::fmt;

use super::curve::CurveParameters;
use super::encoding::{uint_from_hex, uint_to_hex};
use crate::error::{validate, Error, Result};
use crypto_bigint::{NonZero, RandomMod, U256};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A private or ephemeral scalar, validated against a curve order.
///
/// Wiped from memory on drop. `Debug` output is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(U256);

impl Scalar {
    /// Wrap `value`, requiring 1 ≤ value ≤ N − 1.
    pub fn new(value: U256, curve: &CurveParameters) -> Result<Self> {
        validate::scalar_range("scalar", &value, curve.order())?;
        Ok(Scalar(value))
    }

    /// Parse a big-endian hex scalar and range-check it.
    pub fn from_hex(hex: &str, curve: &CurveParameters) -> Result<Self> {
        let value = uint_from_hex(hex)
            .map_err(|_| Error::scalar("scalar", "not a hexadecimal integer"))?;
        Self::new(value, curve)
    }

    /// Draw uniformly from [1, N − 1].
    pub fn random<R: RngCore + CryptoRng>(curve: &CurveParameters, rng: &mut R) -> Result<Self> {
        let high = curve.order().wrapping_sub(&U256::ONE);
        Self::random_in_range(&U256::ONE, &high, curve, rng)
    }

    /// Draw uniformly from the inclusive range [low, high], which must lie
    /// inside [1, N − 1].
    pub fn random_in_range<R: RngCore + CryptoRng>(
        low: &U256,
        high: &U256,
        curve: &CurveParameters,
        rng: &mut R,
    ) -> Result<Self> {
        validate::scalar_range("scalar range low bound", low, curve.order())?;
        validate::scalar_range("scalar range high bound", high, curve.order())?;
        if low > high {
            return Err(Error::scalar(
                "scalar range",
                "low bound exceeds high bound",
            ));
        }
        Ok(Scalar(uniform_in_range(low, high, rng)?))
    }

    /// The scalar value
    pub fn as_uint(&self) -> &U256 {
        &self.0
    }

    /// Fixed-width hex encoding sized to the curve order
    pub fn to_hex(&self, curve: &CurveParameters) -> Result<String> {
        uint_to_hex(&self.0, curve.scalar_hex_width())
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(<redacted>)")
    }
}

/// Uniform draw from [low, high]: low plus a rejection-sampled offset below
/// the span size.
fn uniform_in_range<R: RngCore + CryptoRng>(low: &U256, high: &U256, rng: &mut R) -> Result<U256> {
    let size = high.wrapping_sub(low).wrapping_add(&U256::ONE);
    let size = Option::<NonZero<U256>>::from(NonZero::new(size))
        .ok_or_else(|| Error::scalar("scalar range", "range covers every integer"))?;
    Ok(low.wrapping_add(&U256::random_mod(rng, &size)))
}
