//! Session keys derived from the message point

use core::fmt;

use crate::error::{Error, Result};
use ecrekey_algorithms::ec::{uint_to_hex, CurveParameters, CurvePoint};
use ecrekey_algorithms::validate;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A session key: the leading hex digits of the message point's x-coordinate.
///
/// This is a plain truncation of M.x, not the output of a key derivation
/// function. Comparison runs in constant time and the digits are wiped on
/// drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey(String);

impl SessionKey {
    /// Derive the key from M.
    ///
    /// M.x is written as big-endian hex without leading zeros and the first
    /// `width` digits are kept. When fewer than `width` digits remain they
    /// are zero-padded on the left instead.
    pub fn derive(message: &CurvePoint, curve: &CurveParameters, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::Recovery("session key width is zero"));
        }
        let x = message
            .x()
            .ok_or(Error::Recovery("message point is the identity"))?;
        let mut full = uint_to_hex(x, curve.coordinate_hex_width())?;

        let digits = match full.trim_start_matches('0') {
            "" => "0",
            significant => significant,
        };
        let key = if digits.len() >= width {
            digits[..width].to_owned()
        } else {
            let mut padded = "0".repeat(width - digits.len());
            padded.push_str(digits);
            padded
        };
        full.zeroize();
        Ok(SessionKey(key))
    }

    /// Wrap a session key received as a handoff field.
    ///
    /// Accepts any non-empty run of hex digits and normalizes to lowercase.
    pub fn from_hex(digits: &str) -> Result<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Recovery("session key is not a hex string"));
        }
        Ok(SessionKey(digits.to_ascii_lowercase()))
    }

    /// Like [`SessionKey::from_hex`], additionally requiring exactly `width`
    /// digits.
    pub fn from_hex_with_width(digits: &str, width: usize) -> Result<Self> {
        validate::length("session key", digits.len(), width)?;
        Self::from_hex(digits)
    }

    /// Lowercase hex digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a derived key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ConstantTimeEq for SessionKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_len = Choice::from((self.0.len() == other.0.len()) as u8);
        same_len & self.0.as_bytes().ct_eq(other.0.as_bytes())
    }
}

impl PartialEq for SessionKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SessionKey {}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey({} hex digits)", self.0.len())
    }
}
