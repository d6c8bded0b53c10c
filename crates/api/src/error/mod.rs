//! Error handling for the ecrekey ecosystem

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, ErrorKind, Result};

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::KeyParse {
            context: "key record I/O",
            message: e.to_string(),
        }
    }
}
