//! ElGamal rekeying over a prime-field Weierstrass curve
//!
//! - [`key_record`]: the persisted `label;xHex;yHex` public key record
//! - [`source`]: where ephemeral and message scalars come from
//! - [`session`]: session key derivation from M.x
//! - [`ciphertext`]: the (R, C) pair and its fixed-width handoff tuple
//! - [`protocol`]: sender-side rekeying and receiver-side recovery

pub mod ciphertext;
pub mod key_record;
pub mod protocol;
pub mod session;
pub mod source;

pub use ciphertext::{Ciphertext, RekeyMessage};
pub use key_record::{load_public_key, FileKeySource, KeyRecord};
pub use protocol::{recover, recover_message, RekeyConfig, RekeyOutput, RekeyProtocol};
pub use session::SessionKey;
pub use source::ScalarSource;
