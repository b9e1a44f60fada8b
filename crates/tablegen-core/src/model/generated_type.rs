use super::{field_ident, type_ident, Field};
use crate::{err, keys::KeyStrategy, mapping::TypeMap, schema::Table, Error, Result};

use serde::Serialize;

/// The in-memory description of one generated struct.
///
/// Built once per table and per run, then handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedType {
    /// Rust identifier of the struct
    pub name: String,

    /// Name of the source table
    pub table_name: String,

    /// Schema of the source table
    pub schema: String,

    /// One field per column, in column ordinal order
    pub fields: Vec<Field>,

    /// True when the database assigns primary key values
    pub auto_key: bool,
}

impl GeneratedType {
    /// Builds the generated type for `table`.
    ///
    /// Fields keep the table's column order. Fails if the table or one of its
    /// columns does not yield a usable identifier.
    pub fn build(table: &Table, type_map: &TypeMap, keys: &KeyStrategy) -> Result<Self> {
        let context = || err!("failed to build type; table={}.{}", table.schema, table.name);

        let name = type_ident(&table.name).map_err(|e| e.context(context()))?;

        let mut fields: Vec<Field> = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            let ident = field_ident(&column.name).map_err(|e| {
                e.context(err!("column={}", column.name))
                    .context(context())
            })?;

            if let Some(other) = fields.iter().find(|field| field.name == ident) {
                return Err(Error::field_resolution(
                    &column.name,
                    format!(
                        "identifier `{ident}` is already used by column `{}`",
                        other.column.name
                    ),
                )
                .context(context()));
            }

            let resolved = type_map.resolve(column);

            fields.push(Field {
                name: ident,
                ty: resolved.ty.to_string(),
                nil_value: resolved.nil_value.to_string(),
                column: column.clone(),
            });
        }

        Ok(Self {
            name,
            table_name: table.name.clone(),
            schema: table.schema.clone(),
            fields,
            auto_key: keys.resolve(&table.name),
        })
    }

    /// Primary key fields, in column order.
    pub fn primary_key(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_primary_key())
    }

    pub fn non_key_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.is_primary_key())
    }

    /// Fields supplied by the application when inserting a row.
    ///
    /// Key fields are left out when the database generates them.
    pub fn insert_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields
            .iter()
            .filter(|field| !(self.auto_key && field.is_primary_key()))
    }

    /// Fields read back from the database after inserting a row.
    pub fn returning_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields
            .iter()
            .filter(|field| self.auto_key && field.is_primary_key())
    }
}
