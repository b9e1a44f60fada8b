use std::sync::Arc;
use tablegen_codegen::{Format, Template, Unparse};
use tablegen_core::{KeyStrategy, TypeMap};

/// Settings for one generation run.
///
/// Every default is an explicit value held here; nothing is read from global
/// state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database schema to introspect
    pub schema: String,

    /// Column type to Rust type mapping
    pub type_map: TypeMap,

    /// Which tables have database-generated primary keys
    pub keys: KeyStrategy,

    /// Template sources, rendered in order for every table
    pub templates: Vec<Template>,

    /// Tables to skip
    pub exclude: Vec<String>,

    /// Formatting pass applied to each rendered block
    pub formatter: Arc<dyn Format>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    pub fn keys(mut self, keys: KeyStrategy) -> Self {
        self.keys = keys;
        self
    }

    /// Replace the bundled templates.
    pub fn templates(mut self, templates: Vec<Template>) -> Self {
        self.templates = templates;
        self
    }

    /// Skip `table` when generating.
    pub fn exclude(mut self, table: impl Into<String>) -> Self {
        self.exclude.push(table.into());
        self
    }

    pub fn formatter(mut self, formatter: impl Format + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    pub(crate) fn is_excluded(&self, table: &str) -> bool {
        self.exclude.iter().any(|name| name == table)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: "public".to_string(),
            type_map: TypeMap::postgresql(),
            keys: KeyStrategy::default(),
            templates: Template::bundled(),
            exclude: vec![],
            formatter: Arc::new(Unparse),
        }
    }
}
