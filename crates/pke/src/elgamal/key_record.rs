//! Persisted public key records
//!
//! A node's public key is stored as a single line `label;xHex;yHex` with
//! big-endian hex coordinates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use ecrekey_algorithms::ec::{uint_from_hex, CurveParameters, CurvePoint};
use ecrekey_api::error::{Error as CoreError, ResultExt};
use ecrekey_api::KeySource;
use ecrekey_params::utils::rekey::{KEY_RECORD_FIELDS, KEY_RECORD_SEPARATOR};

/// A labelled, on-curve public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRecord {
    label: String,
    public_key: CurvePoint,
}

impl KeyRecord {
    /// Build a record from an already computed public key.
    ///
    /// The label may not contain the field separator or a line break, and
    /// the key must be a finite point on `curve`.
    pub fn new(label: impl Into<String>, public_key: CurvePoint, curve: &CurveParameters) -> Result<Self> {
        let label = label.into();
        if label.contains(KEY_RECORD_SEPARATOR) || label.contains(['\n', '\r']) {
            return Err(Error::KeyParse("label contains a reserved character"));
        }
        check_public_key(&public_key, curve)?;
        Ok(Self { label, public_key })
    }

    /// Parse one record line.
    ///
    /// Surrounding whitespace and a trailing line break are ignored. Fails
    /// with [`Error::KeyParse`] for an empty line, a field count other than
    /// three, non-hex coordinates, or a point that is not on the curve.
    pub fn parse(line: &str, curve: &CurveParameters) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(Error::KeyParse("empty key record"));
        }

        let fields: Vec<&str> = line.split(KEY_RECORD_SEPARATOR).collect();
        if fields.len() != KEY_RECORD_FIELDS {
            return Err(Error::KeyParse("expected label;xHex;yHex"));
        }

        let x = uint_from_hex(fields[1]).map_err(|_| Error::KeyParse("x coordinate is not hexadecimal"))?;
        let y = uint_from_hex(fields[2]).map_err(|_| Error::KeyParse("y coordinate is not hexadecimal"))?;
        let public_key = CurvePoint::new(x, y);

        let label = fields[0].trim();
        if !curve.is_on_curve(&public_key) {
            tracing::warn!(label, curve = %curve.name(), "rejected off-curve public key");
            return Err(Error::KeyParse("point is not on the curve"));
        }

        tracing::debug!(label, curve = %curve.name(), "loaded public key record");
        Ok(Self {
            label: label.to_owned(),
            public_key,
        })
    }

    /// Record label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node public key Y
    pub fn public_key(&self) -> &CurvePoint {
        &self.public_key
    }

    /// Encode as `label;xHex;yHex` with fixed-width coordinates.
    pub fn to_line(&self, curve: &CurveParameters) -> Result<String> {
        let (x, y) = self.public_key.to_hex(curve)?;
        Ok(format!(
            "{}{sep}{}{sep}{}",
            self.label,
            x,
            y,
            sep = KEY_RECORD_SEPARATOR
        ))
    }
}

fn check_public_key(point: &CurvePoint, curve: &CurveParameters) -> Result<()> {
    if point.is_identity() {
        return Err(Error::KeyParse("public key is the identity"));
    }
    if !curve.is_on_curve(point) {
        return Err(Error::KeyParse("point is not on the curve"));
    }
    Ok(())
}

/// A [`KeySource`] backed by a key file; only the first line is used.
#[derive(Clone, Debug)]
pub struct FileKeySource {
    path: PathBuf,
}

impl FileKeySource {
    /// Read records from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the key file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeySource for FileKeySource {
    fn read_record(&mut self) -> ecrekey_api::Result<String> {
        let contents = fs::read_to_string(&self.path).with_context("key file")?;
        match contents.lines().next() {
            Some(line) if !line.trim().is_empty() => Ok(line.to_owned()),
            _ => Err(CoreError::KeyParse {
                context: "key file",
                message: format!("{}: empty key file", self.path.display()),
            }),
        }
    }
}

/// Load and validate the public key record stored at `path`.
pub fn load_public_key(path: impl AsRef<Path>, curve: &CurveParameters) -> Result<KeyRecord> {
    let mut source = FileKeySource::new(path.as_ref());
    let line = source
        .read_record()
        .map_err(|e| Error::KeySource(e.to_string()))?;
    KeyRecord::parse(&line, curve)
}
