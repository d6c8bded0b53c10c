//! Elliptic-curve ElGamal rekeying for remote sensor nodes.
//!
//! A base station holding a node's public key Y draws an ephemeral scalar k
//! and a message generator g, derives a session key from M = g·G, and sends
//! the node (R, C) = (k·G, k·Y + M). The node recovers M = C − d·R with its
//! private scalar d and re-derives the same session key.
//!
//! The session key is a truncation of M.x, not the output of a KDF.
#![forbid(unsafe_code)]

pub mod elgamal;
pub mod error;

// Re-export key items
pub use elgamal::{
    load_public_key, recover, recover_message, Ciphertext, FileKeySource, KeyRecord, RekeyConfig,
    RekeyMessage, RekeyOutput, RekeyProtocol, ScalarSource, SessionKey,
};
pub use error::{Error, Result};
