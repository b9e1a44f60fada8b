use super::Error;

/// Error when rendered text is rejected by the source formatter.
///
/// If the templates and the model agree, rendered text is always valid
/// source, so this error usually points at a broken custom template.
#[derive(Debug)]
pub(super) struct FormatError {
    message: Box<str>,
}

impl std::error::Error for FormatError {}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "rendered source is not valid Rust: {}", self.message)
    }
}

impl Error {
    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Format(FormatError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a format error.
    pub fn is_format(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Format(_)))
    }
}
