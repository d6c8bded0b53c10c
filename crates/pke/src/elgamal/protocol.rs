//! Sender-side rekeying and receiver-side recovery

use super::ciphertext::{Ciphertext, RekeyMessage};
use super::key_record::KeyRecord;
use super::session::SessionKey;
use super::source::ScalarSource;
use crate::error::{Error, Result};
use crypto_bigint::U256;
use ecrekey_algorithms::ec::{self, CurveParameters, CurvePoint, Scalar};
use ecrekey_algorithms::error::Error as PrimitiveError;
use ecrekey_api::{KeySource, RekeyTransport};
use ecrekey_params::utils::rekey::{LEGACY_MESSAGE_GENERATOR_MIN, SESSION_KEY_HEX_WIDTH};
use rand::{CryptoRng, RngCore};

/// Scalar sources and output width for one [`RekeyProtocol`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RekeyConfig {
    /// Source of the ephemeral scalar k
    pub ephemeral: ScalarSource,
    /// Source of the message generator g, with M = g·G
    pub message: ScalarSource,
    /// Number of hex digits of M.x kept as the session key
    pub session_key_hex_width: usize,
}

impl RekeyConfig {
    /// Fresh uniform k and g over [1, N − 1] on every run
    pub fn random(curve: &CurveParameters) -> Self {
        Self {
            ephemeral: ScalarSource::full_range(curve),
            message: ScalarSource::full_range(curve),
            session_key_hex_width: SESSION_KEY_HEX_WIDTH,
        }
    }

    /// Fixed k and g, for reproducible runs
    pub fn deterministic(k: U256, g: U256) -> Self {
        Self {
            ephemeral: ScalarSource::Fixed(k),
            message: ScalarSource::Fixed(g),
            session_key_hex_width: SESSION_KEY_HEX_WIDTH,
        }
    }

    /// The legacy deployment: one fixed ephemeral scalar for every node and
    /// g drawn from [2000, N − 1].
    ///
    /// Reusing k across rekeys lets anyone holding two ciphertexts for the
    /// same node relate their message points. Only use this to interoperate
    /// with deployed nodes.
    pub fn legacy(curve: &CurveParameters, k: U256) -> Self {
        Self {
            ephemeral: ScalarSource::Fixed(k),
            message: ScalarSource::UniformRandom {
                low: U256::from_u64(LEGACY_MESSAGE_GENERATOR_MIN),
                high: curve.order().wrapping_sub(&U256::ONE),
            },
            session_key_hex_width: SESSION_KEY_HEX_WIDTH,
        }
    }

    /// Keep `width` hex digits of M.x instead of the default
    pub fn with_session_key_hex_width(mut self, width: usize) -> Self {
        self.session_key_hex_width = width;
        self
    }

    /// Check both sources and the width against `curve`.
    pub fn validate(&self, curve: &CurveParameters) -> Result<()> {
        self.ephemeral.validate(curve)?;
        self.message.validate(curve)?;
        if self.session_key_hex_width == 0 {
            return Err(PrimitiveError::param("session key width", "must be at least one digit").into());
        }
        Ok(())
    }
}

/// Result of one rekey: the ciphertext for the node and the session key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RekeyOutput {
    /// (R, C)
    pub ciphertext: Ciphertext,
    /// Session key derived from M
    pub session_key: SessionKey,
}

impl RekeyOutput {
    /// Fixed-width handoff tuple for the transport
    pub fn to_message(&self, curve: &CurveParameters) -> Result<RekeyMessage> {
        RekeyMessage::encode(&self.ciphertext, &self.session_key, curve)
    }
}

/// ElGamal rekeying bound to one curve and one configuration.
///
/// Holds only shared references and plain values, so one protocol can serve
/// concurrent rekeys from several threads.
#[derive(Clone, Debug)]
pub struct RekeyProtocol<'a> {
    curve: &'a CurveParameters,
    config: RekeyConfig,
}

impl<'a> RekeyProtocol<'a> {
    /// Bind a validated configuration to `curve`.
    pub fn new(curve: &'a CurveParameters, config: RekeyConfig) -> Result<Self> {
        config.validate(curve)?;
        Ok(Self { curve, config })
    }

    /// Curve in use
    pub fn curve(&self) -> &CurveParameters {
        self.curve
    }

    /// Configuration in use
    pub fn config(&self) -> &RekeyConfig {
        &self.config
    }

    /// Rekey the node whose public key is `public_key`.
    ///
    /// Draws k then g, computes M = g·G, the session key from M.x,
    /// R = k·G and C = k·Y + M. Any failure aborts with no output.
    #[tracing::instrument(level = "debug", skip_all, fields(curve = %self.curve.name()))]
    pub fn rekey<R: RngCore + CryptoRng>(&self, public_key: &CurvePoint, rng: &mut R) -> Result<RekeyOutput> {
        let curve = self.curve;
        if public_key.is_identity() {
            return Err(Error::KeyParse("public key is the identity"));
        }
        curve.validate_point(public_key, "rekey public key")?;

        let k = self.config.ephemeral.draw(curve, rng)?;
        let g = self.config.message.draw(curve, rng)?;

        let message = ec::scalar_mult_base_g(&g, curve)?;
        let session_key = SessionKey::derive(&message, curve, self.config.session_key_hex_width)?;

        let r = ec::scalar_mult_base_g(&k, curve)?;
        let shared = ec::scalar_mult(&k, public_key, curve)?;
        let c = shared.add(&message, curve)?;
        if c.is_identity() {
            return Err(PrimitiveError::Processing {
                operation: "rekey",
                details: "masked message is the identity",
            }
            .into());
        }

        tracing::debug!(session_key_digits = session_key.len(), "rekey complete");
        Ok(RekeyOutput {
            ciphertext: Ciphertext::new(r, c),
            session_key,
        })
    }

    /// Read the node's key record, rekey it and hand the tuple to the
    /// transport.
    ///
    /// The transport is only invoked once every value has been computed
    /// and encoded, so a failure at any step delivers nothing.
    pub fn rekey_and_deliver<S, T, R>(&self, mut source: S, mut transport: T, rng: &mut R) -> Result<RekeyOutput>
    where
        S: KeySource,
        T: RekeyTransport,
        R: RngCore + CryptoRng,
    {
        let line = source.read_record()?;
        let record = KeyRecord::parse(&line, self.curve)?;
        tracing::debug!(label = record.label(), "rekeying node");

        let output = self.rekey(record.public_key(), rng)?;
        let message = output.to_message(self.curve)?;
        transport
            .deliver(&message.fields())
            .map_err(Error::Transport)?;
        Ok(output)
    }
}

/// Recover M′ = C − d·R on the receiving node.
pub fn recover_message(curve: &CurveParameters, private_key: &Scalar, ciphertext: &Ciphertext) -> Result<CurvePoint> {
    let r = ciphertext.r();
    let c = ciphertext.c();
    if r.is_identity() || c.is_identity() {
        return Err(Error::Recovery("ciphertext contains the identity"));
    }
    curve.validate_point(r, "recovery R")?;
    curve.validate_point(c, "recovery C")?;

    let shared = ec::scalar_mult(private_key, r, curve)?;
    let message = c.sub(&shared, curve)?;
    if message.is_identity() {
        return Err(Error::Recovery("recovered message is the identity"));
    }
    Ok(message)
}

/// Re-derive the session key from (R, C) with the node's private scalar.
///
/// `width` must match the sender's configured session key width.
pub fn recover(curve: &CurveParameters, private_key: &Scalar, ciphertext: &Ciphertext, width: usize) -> Result<SessionKey> {
    let message = recover_message(curve, private_key, ciphertext)?;
    tracing::debug!(curve = %curve.name(), "recovered message point");
    SessionKey::derive(&message, curve, width)
}
