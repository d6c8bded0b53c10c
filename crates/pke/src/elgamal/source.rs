//! Scalar sources for the ephemeral key and the message generator

use core::fmt;

use crate::error::{Error, Result};
use crypto_bigint::U256;
use ecrekey_algorithms::ec::{CurveParameters, Scalar};
use ecrekey_algorithms::validate;
use rand::{CryptoRng, RngCore};

/// Where a protocol scalar comes from.
///
/// Production configurations draw every scalar at random; a fixed value
/// exists for reproducible tests and for replaying legacy deployments.
#[derive(Clone, PartialEq, Eq)]
pub enum ScalarSource {
    /// Always use this value
    Fixed(U256),
    /// Draw uniformly from the inclusive range [low, high]
    UniformRandom {
        /// Smallest value that may be drawn
        low: U256,
        /// Largest value that may be drawn
        high: U256,
    },
}

impl ScalarSource {
    /// Uniform over the whole scalar range [1, N − 1]
    pub fn full_range(curve: &CurveParameters) -> Self {
        ScalarSource::UniformRandom {
            low: U256::ONE,
            high: curve.order().wrapping_sub(&U256::ONE),
        }
    }

    /// Check that every value this source can produce is a valid scalar.
    pub fn validate(&self, curve: &CurveParameters) -> Result<()> {
        match self {
            ScalarSource::Fixed(value) => {
                validate::scalar_range("fixed scalar", value, curve.order())?;
            }
            ScalarSource::UniformRandom { low, high } => {
                if *low == U256::ZERO {
                    return Err(Error::RandomRange("low bound is zero"));
                }
                if high >= curve.order() {
                    return Err(Error::RandomRange("high bound is not below the group order"));
                }
                if low > high {
                    return Err(Error::RandomRange("low bound exceeds high bound"));
                }
            }
        }
        Ok(())
    }

    /// Produce a scalar for one protocol run.
    pub fn draw<R: RngCore + CryptoRng>(&self, curve: &CurveParameters, rng: &mut R) -> Result<Scalar> {
        self.validate(curve)?;
        let scalar = match self {
            ScalarSource::Fixed(value) => Scalar::new(*value, curve)?,
            ScalarSource::UniformRandom { low, high } => Scalar::random_in_range(low, high, curve, rng)?,
        };
        Ok(scalar)
    }
}

impl fmt::Debug for ScalarSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarSource::Fixed(_) => f.write_str("Fixed(<redacted>)"),
            ScalarSource::UniformRandom { low, high } => f
                .debug_struct("UniformRandom")
                .field("low", low)
                .field("high", high)
                .finish(),
        }
    }
}
