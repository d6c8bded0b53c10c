//! Error handling traits for the ecrekey ecosystem

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Add context to an error when converting to Error
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    /// Add message to an error when converting to Error
    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_becomes_key_parse_with_context() {
        let io: core::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        let err = io.with_context("key file").unwrap_err();
        assert_eq!(
            err,
            Error::KeyParse {
                context: "key file",
                message: "no such file".into(),
            }
        );
    }

    #[test]
    fn test_with_message_replaces_message() {
        let res: Result<()> = Err(Error::Transport {
            context: "serial",
            message: "timeout".into(),
        });
        let err = res.with_message("link down").unwrap_err();
        assert_eq!(err.to_string(), "transport failure in serial: link down");
    }
}
