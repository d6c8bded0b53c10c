//! Public API types for the ecrekey library
//!
//! This crate holds the error taxonomy every ecrekey operation reports and the
//! traits describing the collaborators that sit outside the arithmetic core:
//! where a node's key record comes from and where the rekey tuple goes.

pub mod error;
pub mod traits;

pub use error::{Error, ErrorKind, Result};
pub use traits::{KeySource, RekeyTransport};
