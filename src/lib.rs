//! # ecrekey
//!
//! Elliptic-curve ElGamal rekeying for remote sensor nodes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecrekey = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the rekey handoff tuple
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecrekey-api`]: public error taxonomy and collaborator traits
//! - [`ecrekey-params`]: curve constants and protocol constants
//! - [`ecrekey-algorithms`]: prime-field curve arithmetic
//! - [`ecrekey-pke`]: key records, the rekey protocol and recovery
//!
//! ## Example
//!
//! ```no_run
//! use ecrekey::prelude::{CurveParameters, RekeyConfig};
//!
//! let curve = CurveParameters::nist_p192();
//! let mut delivered: Vec<Vec<String>> = Vec::new();
//! let output = ecrekey::rekey_from_file(
//!     "keys/node-7.txt",
//!     &curve,
//!     RekeyConfig::random(&curve),
//!     &mut delivered,
//! )?;
//! println!("session key has {} digits", output.session_key.len());
//! # Ok::<(), ecrekey::pke::Error>(())
//! ```
//!
//! The arithmetic is variable-time; it is meant for the rekeying of
//! constrained nodes and not for settings where timing is observable by an
//! attacker.

#![forbid(unsafe_code)]

use std::path::Path;

pub use ecrekey_algorithms as algorithms;
pub use ecrekey_api as api;
pub use ecrekey_params as params;
pub use ecrekey_pke as pke;

use ecrekey_algorithms::ec::CurveParameters;
use ecrekey_api::RekeyTransport;
use ecrekey_pke::{FileKeySource, RekeyConfig, RekeyOutput, RekeyProtocol};
use rand::rngs::OsRng;

/// Rekey the node whose key record is stored at `key_path` and hand the
/// result to `transport`, drawing scalars from the operating system RNG.
pub fn rekey_from_file<P, T>(
    key_path: P,
    curve: &CurveParameters,
    config: RekeyConfig,
    transport: T,
) -> pke::Result<RekeyOutput>
where
    P: AsRef<Path>,
    T: RekeyTransport,
{
    let protocol = RekeyProtocol::new(curve, config)?;
    protocol.rekey_and_deliver(FileKeySource::new(key_path.as_ref()), transport, &mut OsRng)
}

/// Common imports for ecrekey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export collaborator traits
    pub use crate::api::{KeySource, RekeyTransport};

    // Re-export curve arithmetic
    pub use crate::algorithms::ec::{generate_keypair, CurveParameters, CurvePoint, Scalar};
    pub use crate::algorithms::U256;

    // Re-export the protocol
    pub use crate::pke::{
        load_public_key, recover, Ciphertext, KeyRecord, RekeyConfig, RekeyMessage, RekeyOutput,
        RekeyProtocol, ScalarSource, SessionKey,
    };
}
