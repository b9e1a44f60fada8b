use super::Error;

/// Error when a configuration document is missing or malformed.
///
/// This occurs when:
/// - A type map or key strategy file cannot be read
/// - The document is not valid TOML or has the wrong shape
/// - The type map has no `default` rule
#[derive(Debug)]
pub(super) struct ConfigError {
    message: Box<str>,
}

impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Config(ConfigError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a configuration error.
    pub fn is_config(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Config(_)))
    }
}
