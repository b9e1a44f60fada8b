use serde::Serialize;

/// A table column as reported by the database catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// 1-based position of the column in the table definition.
    pub ordinal: i32,

    /// The name of the column in the database.
    pub name: String,

    /// The database type, as formatted by the catalog (e.g. `character varying(20)`).
    pub data_type: String,

    /// Whether the column carries a `NOT NULL` constraint.
    pub not_null: bool,

    /// The default value expression. Empty when the column has no default.
    pub default_value: String,

    /// True if the column is part of the table's primary key
    pub is_primary_key: bool,
}

impl Column {
    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }
}
