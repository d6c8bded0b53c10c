//! Rekey ciphertext and its handoff encoding

use core::fmt;

use super::session::SessionKey;
use crate::error::{Error, Result};
use ecrekey_algorithms::ec::{uint_from_hex, CurveParameters, CurvePoint};
use ecrekey_algorithms::validate;
use ecrekey_params::utils::rekey::REKEY_TUPLE_FIELDS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ElGamal ciphertext (R, C) = (k·G, k·Y + M).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    r: CurvePoint,
    c: CurvePoint,
}

impl Ciphertext {
    /// Pair an ephemeral public point R with a masked message point C
    pub fn new(r: CurvePoint, c: CurvePoint) -> Self {
        Self { r, c }
    }

    /// Ephemeral public point R = k·G
    pub fn r(&self) -> &CurvePoint {
        &self.r
    }

    /// Masked message point C = k·Y + M
    pub fn c(&self) -> &CurvePoint {
        &self.c
    }
}

/// The tuple handed to the transport: `(R.x, R.y, C.x, C.y, SessionKey)`.
///
/// Coordinates are fixed-width, zero-padded, lowercase big-endian hex.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RekeyMessage {
    r_x: String,
    r_y: String,
    c_x: String,
    c_y: String,
    session_key: String,
}

impl RekeyMessage {
    /// Encode a ciphertext and its session key for handoff.
    pub fn encode(ciphertext: &Ciphertext, session_key: &SessionKey, curve: &CurveParameters) -> Result<Self> {
        let (r_x, r_y) = ciphertext.r.to_hex(curve)?;
        let (c_x, c_y) = ciphertext.c.to_hex(curve)?;
        Ok(Self {
            r_x,
            r_y,
            c_x,
            c_y,
            session_key: session_key.as_str().to_owned(),
        })
    }

    /// Fields in transport order
    pub fn fields(&self) -> [&str; REKEY_TUPLE_FIELDS] {
        [
            self.r_x.as_str(),
            self.r_y.as_str(),
            self.c_x.as_str(),
            self.c_y.as_str(),
            self.session_key.as_str(),
        ]
    }

    /// Rebuild a message from received fields.
    ///
    /// Exactly five fields are required, each coordinate must have the
    /// curve's fixed width, the session key must have
    /// `session_key_hex_width` digits, and every field must be hex.
    pub fn from_fields(fields: &[&str], curve: &CurveParameters, session_key_hex_width: usize) -> Result<Self> {
        validate::length("rekey tuple", fields.len(), REKEY_TUPLE_FIELDS)?;
        let width = curve.coordinate_hex_width();
        Ok(Self {
            r_x: coordinate_field(fields[0], width)?,
            r_y: coordinate_field(fields[1], width)?,
            c_x: coordinate_field(fields[2], width)?,
            c_y: coordinate_field(fields[3], width)?,
            session_key: SessionKey::from_hex_with_width(fields[4], session_key_hex_width)?
                .as_str()
                .to_owned(),
        })
    }

    /// Decode (R, C), rejecting points that are not on the curve.
    pub fn ciphertext(&self, curve: &CurveParameters) -> Result<Ciphertext> {
        let r = decode_point(&self.r_x, &self.r_y)?;
        let c = decode_point(&self.c_x, &self.c_y)?;
        curve.validate_point(&r, "rekey message R")?;
        curve.validate_point(&c, "rekey message C")?;
        Ok(Ciphertext::new(r, c))
    }

    /// The transmitted session key
    pub fn session_key(&self) -> Result<SessionKey> {
        SessionKey::from_hex(&self.session_key)
    }
}

fn coordinate_field(field: &str, width: usize) -> Result<String> {
    validate::length("rekey coordinate", field.len(), width)?;
    if !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Recovery("coordinate is not hexadecimal"));
    }
    Ok(field.to_ascii_lowercase())
}

fn decode_point(x: &str, y: &str) -> Result<CurvePoint> {
    Ok(CurvePoint::new(uint_from_hex(x)?, uint_from_hex(y)?))
}

impl fmt::Debug for RekeyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RekeyMessage")
            .field("r_x", &self.r_x)
            .field("r_y", &self.r_y)
            .field("c_x", &self.c_x)
            .field("c_y", &self.c_y)
            .field("session_key", &"<redacted>")
            .finish()
    }
}
