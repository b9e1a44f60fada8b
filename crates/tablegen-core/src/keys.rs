use crate::{err, Error, Result};

use indexmap::IndexMap;
use std::path::Path;

/// Table name matching every table without an explicit entry.
pub const WILDCARD: &str = "*";

/// Decides, per table, whether the database generates primary key values.
///
/// The configuration document maps table names, or the `"*"` wildcard, to a
/// boolean:
///
/// ```toml
/// "*" = true
/// countries = false
/// ```
///
/// Tables with no entry and no wildcard use application-supplied keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStrategy {
    tables: IndexMap<String, bool>,
}

impl KeyStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy for `table`, or for every table when `table` is `"*"`.
    pub fn table(mut self, table: impl Into<String>, auto_generated: bool) -> Self {
        self.tables.insert(table.into(), auto_generated);
        self
    }

    /// Sets the fallback strategy.
    pub fn wildcard(self, auto_generated: bool) -> Self {
        self.table(WILDCARD, auto_generated)
    }

    /// Parses a key strategy document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let tables: IndexMap<String, bool> =
            toml::from_str(src).map_err(|e| Error::config(e.to_string()))?;
        Ok(Self { tables })
    }

    /// Reads and parses a key strategy document from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let context = || err!("failed to load key strategy; path={}", path.display());

        let src = std::fs::read_to_string(path)
            .map_err(|e| Error::config(e.to_string()).context(context()))?;
        Self::from_toml(&src).map_err(|e| e.context(context()))
    }

    /// Returns `true` if the database assigns primary key values for `table`.
    pub fn resolve(&self, table: &str) -> bool {
        self.tables
            .get(table)
            .or_else(|| self.tables.get(WILDCARD))
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_entry_beats_wildcard() {
        let keys = KeyStrategy::from_toml(
            r#"
            "*" = true
            countries = false
            "#,
        )
        .unwrap();

        assert!(keys.resolve("users"));
        assert!(!keys.resolve("countries"));
    }

    #[test]
    fn no_entry_no_wildcard_is_application_supplied() {
        let keys = KeyStrategy::new().table("users", true);

        assert!(keys.resolve("users"));
        assert!(!keys.resolve("posts"));
    }

    #[test]
    fn non_boolean_value_is_config_error() {
        let err = KeyStrategy::from_toml(r#"users = "yes""#).unwrap_err();
        assert!(err.is_config());
    }
}
