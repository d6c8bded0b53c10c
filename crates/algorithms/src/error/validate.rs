//! Validation utilities for curve primitives

use super::{Error, Result};
use crypto_bigint::U256;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that `value` lies in [1, order − 1]
#[inline(always)]
pub fn scalar_range(context: &'static str, value: &U256, order: &U256) -> Result<()> {
    if *value == U256::ZERO {
        return Err(Error::scalar(context, "scalar is zero"));
    }
    if value >= order {
        return Err(Error::scalar(context, "scalar is not below the group order"));
    }
    Ok(())
}
