//! Fixed-width big-endian hex encoding for field elements and scalars

use super::field::UINT_BYTES;
use crate::error::{validate, Error, Result};
use crypto_bigint::{Encoding, U256};
use zeroize::Zeroize;

/// Maximum number of significant hex digits a [`U256`] can carry
pub const MAX_HEX_DIGITS: usize = 2 * UINT_BYTES;

/// Parse a big-endian hexadecimal integer.
///
/// Accepts an optional `0x`/`0X` prefix and surrounding whitespace; leading
/// zeros are ignored. Empty input, non-hex characters, and values wider than
/// 256 bits are rejected.
pub fn uint_from_hex(input: &str) -> Result<U256> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(Error::param("hex integer", "empty"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::param("hex integer", "contains a non-hex character"));
    }

    let significant = digits.trim_start_matches('0');
    validate::max_length("hex integer", significant.len(), MAX_HEX_DIGITS)?;

    let mut padded = String::with_capacity(MAX_HEX_DIGITS);
    for _ in significant.len()..MAX_HEX_DIGITS {
        padded.push('0');
    }
    padded.push_str(significant);

    let mut bytes = [0u8; UINT_BYTES];
    hex::decode_to_slice(&padded, &mut bytes)
        .map_err(|_| Error::param("hex integer", "malformed hex"))?;
    let value = U256::from_be_slice(&bytes);
    bytes.zeroize();
    padded.zeroize();
    Ok(value)
}

/// Encode `value` as exactly `width` lowercase hex digits, zero-padded on the
/// left.
///
/// Fails with [`Error::Length`] when the value needs more than `width`
/// digits; values are never silently truncated.
pub fn uint_to_hex(value: &U256, width: usize) -> Result<String> {
    let full = hex::encode(value.to_be_bytes());
    let significant = full.trim_start_matches('0');
    validate::max_length("fixed-width hex", significant.len(), width)?;

    let mut out = String::with_capacity(width);
    for _ in significant.len()..width {
        out.push('0');
    }
    out.push_str(significant);
    Ok(out)
}
