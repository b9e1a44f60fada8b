use tablegen_core::{err, Error, Result};

use std::path::Path;

/// A named template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub source: String,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The struct definition template.
    pub fn structure() -> Self {
        Self::new("struct", include_str!("../templates/struct.hbs"))
    }

    /// The accessor methods template.
    pub fn methods() -> Self {
        Self::new("method", include_str!("../templates/method.hbs"))
    }

    /// Templates used when none are configured: the struct, then its methods.
    pub fn bundled() -> Vec<Self> {
        vec![Self::structure(), Self::methods()]
    }

    /// Reads a template from `path`, naming it after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::config(e.to_string())
                .context(err!("failed to read template; path={}", path.display()))
        })?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, source))
    }
}
