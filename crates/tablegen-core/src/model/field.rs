use crate::schema::Column;

use serde::Serialize;

/// A field of a generated struct, derived from one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Rust identifier of the field
    pub name: String,

    /// Rust type of the field
    #[serde(rename = "type")]
    pub ty: String,

    /// Expression representing "no value" for `ty`
    pub nil_value: String,

    /// The column the field was derived from
    pub column: Column,
}

impl Field {
    pub fn is_primary_key(&self) -> bool {
        self.column.is_primary_key
    }
}
