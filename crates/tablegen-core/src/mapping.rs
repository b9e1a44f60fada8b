use crate::{err, schema::Column, Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Name of the rule used when no other rule matches a column type.
pub const DEFAULT_RULE: &str = "default";

/// Maps raw database column types onto Rust types.
///
/// Rules are kept in declaration order and evaluated in that order, so when
/// several rules list the same database type the first one declared wins.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMap {
    rules: Vec<TypeRule>,

    /// Index of the `default` rule in `rules`
    default: usize,
}

/// A named rule mapping a set of database types to a Rust type and its
/// "no value" sentinel, for both not-null and nullable columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeRule {
    #[serde(skip)]
    pub name: String,

    /// Database type names matched by this rule, compared exactly.
    #[serde(default)]
    pub db_types: Vec<String>,

    pub notnull_type: String,
    pub notnull_nil_value: String,
    pub nullable_type: String,
    pub nullable_nil_value: String,
}

/// The Rust type and sentinel a column resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub ty: &'a str,
    pub nil_value: &'a str,
}

impl TypeMap {
    /// Builds a type map from rules in evaluation order.
    ///
    /// Fails if no rule is named `default`.
    pub fn new(rules: Vec<TypeRule>) -> Result<Self> {
        let Some(default) = rules.iter().position(|rule| rule.name == DEFAULT_RULE) else {
            return Err(Error::config(format!(
                "type map has no `{DEFAULT_RULE}` rule"
            )));
        };

        Ok(Self { rules, default })
    }

    /// The built-in PostgreSQL to Rust mapping.
    pub fn postgresql() -> Self {
        Self::from_toml(include_str!("mapping/postgresql.toml"))
            .expect("built-in type map is valid")
    }

    /// Parses a type map document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let doc: IndexMap<String, TypeRule> =
            toml::from_str(src).map_err(|e| Error::config(e.to_string()))?;

        Self::new(
            doc.into_iter()
                .map(|(name, rule)| TypeRule { name, ..rule })
                .collect(),
        )
    }

    /// Reads and parses a type map document from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let context = || err!("failed to load type map; path={}", path.display());

        let src = std::fs::read_to_string(path)
            .map_err(|e| Error::config(e.to_string()).context(context()))?;
        Self::from_toml(&src).map_err(|e| e.context(context()))
    }

    pub fn rules(&self) -> &[TypeRule] {
        &self.rules
    }

    pub fn default_rule(&self) -> &TypeRule {
        &self.rules[self.default]
    }

    /// Resolves the Rust type and sentinel for `column`.
    ///
    /// The first rule listing the column's database type wins, picking the
    /// not-null or nullable pair from the column's constraint. When no rule
    /// matches, the `default` rule's **not-null** pair is returned even for
    /// nullable columns.
    ///
    /// Types are compared exactly as the catalog prints them, type modifiers
    /// included: a rule listing `character varying` does not match
    /// `character varying(20)`.
    pub fn resolve(&self, column: &Column) -> Resolved<'_> {
        let matched = self
            .rules
            .iter()
            .find(|rule| rule.db_types.iter().any(|ty| *ty == column.data_type));

        match matched {
            Some(rule) if column.not_null => rule.not_null(),
            Some(rule) => rule.nullable(),
            None => {
                tracing::warn!(
                    column = %column.name,
                    data_type = %column.data_type,
                    "no type rule matched; falling back to `{DEFAULT_RULE}`"
                );
                self.default_rule().not_null()
            }
        }
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::postgresql()
    }
}

impl TypeRule {
    pub fn not_null(&self) -> Resolved<'_> {
        Resolved {
            ty: &self.notnull_type,
            nil_value: &self.notnull_nil_value,
        }
    }

    pub fn nullable(&self) -> Resolved<'_> {
        Resolved {
            ty: &self.nullable_type,
            nil_value: &self.nullable_nil_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_map_has_default_rule() {
        let map = TypeMap::postgresql();
        assert_eq!(map.default_rule().name, DEFAULT_RULE);
        assert_eq!(map.default_rule().notnull_type, "String");
    }

    #[test]
    fn rules_keep_declaration_order() {
        let map = TypeMap::from_toml(
            r#"
            [zeta]
            db_types = ["a"]
            notnull_type = "A"
            notnull_nil_value = "A::default()"
            nullable_type = "Option<A>"
            nullable_nil_value = "None"

            [default]
            notnull_type = "String"
            notnull_nil_value = "String::new()"
            nullable_type = "Option<String>"
            nullable_nil_value = "None"

            [alpha]
            db_types = ["b"]
            notnull_type = "B"
            notnull_nil_value = "B::default()"
            nullable_type = "Option<B>"
            nullable_nil_value = "None"
            "#,
        )
        .unwrap();

        let names: Vec<_> = map.rules().iter().map(|rule| rule.name.as_str()).collect();
        assert_eq!(names, ["zeta", "default", "alpha"]);
    }
}
