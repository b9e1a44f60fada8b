mod config;
pub use config::Config;

pub use tablegen_codegen as codegen;
pub use tablegen_codegen::{Renderer, Template};

pub use tablegen_core::{
    catalog, schema, Catalog, Driver, Error, GeneratedType, KeyStrategy, Result, TypeMap,
};

#[cfg(feature = "postgresql")]
pub use tablegen_driver_postgresql::PostgreSQL;

use tablegen_core::err;

/// Generates source for every table in `config.schema`.
///
/// The schema is loaded through `driver`, excluded tables are dropped, and
/// the remaining tables are built and rendered in catalog order. The first
/// error aborts the run; no output is returned for a failed run.
pub fn generate(driver: &mut impl Driver, config: &Config) -> Result<Vec<u8>> {
    let types = build_types(driver, config)?;

    let renderer = Renderer::from_templates(&config.templates)?
        .formatter(config.formatter.clone());
    let out = renderer
        .render_all(&types)
        .map_err(|e| e.context(err!("failed to generate; schema={}", config.schema)))?;

    tracing::info!(
        schema = %config.schema,
        types = types.len(),
        bytes = out.len(),
        "generated source"
    );

    Ok(out)
}

/// Loads the schema and builds a [`GeneratedType`] for every included table.
pub fn build_types(driver: &mut impl Driver, config: &Config) -> Result<Vec<GeneratedType>> {
    let tables = Catalog::postgresql(driver).load_schema(&config.schema)?;

    tables
        .iter()
        .filter(|table| {
            let excluded = config.is_excluded(&table.name);
            if excluded {
                tracing::debug!(table = %table.name, "skipping excluded table");
            }
            !excluded
        })
        .map(|table| GeneratedType::build(table, &config.type_map, &config.keys))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| e.context(err!("failed to generate; schema={}", config.schema)))
}
