use super::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error when a template source cannot be parsed.
#[derive(Debug)]
pub(super) struct TemplateParseError {
    inner: BoxError,
}

/// Error when a parsed template cannot be rendered against the model, usually
/// because it references a field the model does not have.
#[derive(Debug)]
pub(super) struct TemplateExecError {
    inner: BoxError,
}

impl std::error::Error for TemplateParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl std::error::Error for TemplateExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for TemplateParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid template: {}", self.inner)
    }
}

impl core::fmt::Display for TemplateExecError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "template execution failed: {}", self.inner)
    }
}

impl Error {
    /// Creates an error for a template that failed to parse.
    pub fn template_parse(err: impl Into<BoxError>) -> Error {
        Error::from(super::ErrorKind::TemplateParse(TemplateParseError {
            inner: err.into(),
        }))
    }

    /// Creates an error for a template that failed to render.
    pub fn template_exec(err: impl Into<BoxError>) -> Error {
        Error::from(super::ErrorKind::TemplateExec(TemplateExecError {
            inner: err.into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a template parse error.
    pub fn is_template_parse(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TemplateParse(_)))
    }

    /// Returns `true` if this error, or any error it wraps, is a template execution error.
    pub fn is_template_exec(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TemplateExec(_)))
    }
}
