mod driver;
pub use driver::{Driver, Row, Value};

mod queries;
pub use queries::CatalogQueries;

use crate::{
    err,
    schema::{Column, Table, TableKind},
    Error, Result,
};

/// Loads table and column definitions from a database catalog.
///
/// The loader is a pure data fetch: it issues the introspection queries
/// described by [`CatalogQueries`] and maps the returned rows onto
/// [`Table`] and [`Column`] values, in the order the catalog returns them.
#[derive(Debug)]
pub struct Catalog<D> {
    driver: D,
    queries: CatalogQueries,
}

impl<D: Driver> Catalog<D> {
    pub fn new(driver: D, queries: CatalogQueries) -> Self {
        Self { driver, queries }
    }

    /// A loader using the PostgreSQL system catalog queries.
    pub fn postgresql(driver: D) -> Self {
        Self::new(driver, CatalogQueries::POSTGRESQL)
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Lists the ordinary tables in `schema`. Columns are left empty.
    pub fn list_tables(&mut self, schema: &str) -> Result<Vec<Table>> {
        let rows = self
            .driver
            .query(self.queries.tables, &[schema])
            .map_err(|e| e.context(err!("failed to list tables; schema={schema}")))?;

        rows.iter()
            .map(|row| {
                let relkind = row.get_str(0)?;
                let kind = TableKind::from_relkind(relkind).ok_or_else(|| {
                    Error::invalid_row(format!("unsupported relation kind `{relkind}`"))
                })?;

                Ok(Table {
                    kind,
                    ..Table::new(schema, row.get_str(1)?)
                })
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.context(err!("failed to list tables; schema={schema}")))
    }

    /// Lists the columns of `schema.table`, ordered by ordinal position.
    pub fn list_columns(&mut self, schema: &str, table: &str) -> Result<Vec<Column>> {
        let context = || err!("failed to list columns; table={schema}.{table}");

        let rows = self
            .driver
            .query(self.queries.columns, &[schema, table])
            .map_err(|e| e.context(context()))?;

        let mut columns: Vec<Column> = Vec::with_capacity(rows.len());

        for row in &rows {
            let column = column_from_row(row).map_err(|e| e.context(context()))?;

            // Dropped columns leave gaps, but the sequence must never repeat or
            // go backwards.
            if let Some(prev) = columns.last() {
                if column.ordinal <= prev.ordinal {
                    return Err(Error::invalid_row(format!(
                        "column `{}` has ordinal {} after ordinal {}",
                        column.name, column.ordinal, prev.ordinal
                    ))
                    .context(context()));
                }
            }

            columns.push(column);
        }

        Ok(columns)
    }

    /// Loads every ordinary table of `schema` with its columns populated.
    ///
    /// Issues one table query followed by one column query per table.
    pub fn load_schema(&mut self, schema: &str) -> Result<Vec<Table>> {
        let mut tables = self.list_tables(schema)?;

        for table in &mut tables {
            table.columns = self.list_columns(schema, &table.name)?;
            tracing::debug!(
                table = %table.name,
                columns = table.columns.len(),
                "loaded table definition"
            );
        }

        tracing::debug!(schema, tables = tables.len(), "loaded schema");
        Ok(tables)
    }
}

fn column_from_row(row: &Row) -> Result<Column> {
    let ordinal = row.get_i64(0)?;

    Ok(Column {
        ordinal: i32::try_from(ordinal)
            .map_err(|_| Error::invalid_row(format!("ordinal {ordinal} out of range")))?,
        name: row.get_str(1)?.to_string(),
        data_type: row.get_str(2)?.to_string(),
        not_null: row.get_bool(3)?,
        default_value: row.get_opt_str(4)?.unwrap_or_default().to_string(),
        is_primary_key: row.get_bool(5)?,
    })
}
