use super::Column;

/// A database table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Schema the table belongs to
    pub schema: String,

    /// Name of the table
    pub name: String,

    pub kind: TableKind,

    /// The table's columns, ordered by ordinal position
    pub columns: Vec<Column>,
}

/// The kind of catalog object a [`Table`] was loaded from.
///
/// Only ordinary tables are introspected; views, indexes, sequences and the
/// like are excluded by the catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Ordinary,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            kind: TableKind::Ordinary,
            columns: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.is_primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|column| column.is_primary_key)
    }
}

impl TableKind {
    /// Parses a PostgreSQL `pg_class.relkind` code.
    pub fn from_relkind(relkind: &str) -> Option<TableKind> {
        match relkind {
            "r" => Some(TableKind::Ordinary),
            _ => None,
        }
    }
}
