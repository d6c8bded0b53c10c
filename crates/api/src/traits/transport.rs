//! Collaborator traits: key record sources and rekey transports.
//!
//! The rekey core never performs I/O of its own. A [`KeySource`] supplies the
//! single-line key record for a node, and a [`RekeyTransport`] receives the
//! finished tuple of fixed-width hex strings. Serial links, cloud uploads and
//! notifications all live behind these two traits.

use crate::error::Result;

/// Supplies the persisted key record of a remote node.
pub trait KeySource {
    /// Returns the raw record line (`label;xHex;yHex`).
    ///
    /// An absent record must be reported as [`crate::Error::KeyParse`].
    fn read_record(&mut self) -> Result<String>;
}

/// Consumes the ordered rekey tuple `(R.x, R.y, C.x, C.y, SessionKey)`.
pub trait RekeyTransport {
    /// Hand the encoded fields to the link. Fields arrive in tuple order and
    /// are already zero-padded to their fixed widths.
    fn deliver(&mut self, fields: &[&str]) -> Result<()>;
}

impl<T: KeySource + ?Sized> KeySource for &mut T {
    fn read_record(&mut self) -> Result<String> {
        (**self).read_record()
    }
}

impl<T: RekeyTransport + ?Sized> RekeyTransport for &mut T {
    fn deliver(&mut self, fields: &[&str]) -> Result<()> {
        (**self).deliver(fields)
    }
}

/// A transport that collects delivered tuples in memory.
impl RekeyTransport for Vec<Vec<String>> {
    fn deliver(&mut self, fields: &[&str]) -> Result<()> {
        self.push(fields.iter().map(|f| (*f).to_owned()).collect());
        Ok(())
    }
}
