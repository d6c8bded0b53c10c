//! Traits for the collaborators around the rekey core

pub mod transport;

pub use transport::{KeySource, RekeyTransport};
