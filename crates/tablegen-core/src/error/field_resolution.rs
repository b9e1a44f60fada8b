use super::Error;

/// Error when a table or column name yields no valid Rust identifier.
#[derive(Debug)]
pub(super) struct FieldResolutionError {
    name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for FieldResolutionError {}

impl core::fmt::Display for FieldResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot derive an identifier from `{}`: {}",
            self.name, self.reason
        )
    }
}

impl Error {
    /// Creates a field resolution error for the database name `name`.
    pub fn field_resolution(name: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldResolution(FieldResolutionError {
            name: name.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a field resolution error.
    pub fn is_field_resolution(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::FieldResolution(_)))
    }
}
