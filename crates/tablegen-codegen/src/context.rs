use crate::sql;

use serde::Serialize;
use tablegen_core::{Field, GeneratedType};

/// The data a template renders against.
///
/// Exposes every attribute of [`GeneratedType`] at the top level, plus views
/// and statements derived from it so templates need no logic of their own.
#[derive(Debug, Serialize)]
pub struct Context<'a> {
    #[serde(flatten)]
    pub ty: &'a GeneratedType,

    /// `"schema"."table"`
    pub qualified_table: String,

    pub primary_key: Vec<&'a Field>,
    pub non_key_fields: Vec<&'a Field>,
    pub insert_fields: Vec<&'a Field>,
    pub returning_fields: Vec<&'a Field>,

    pub insert_sql: String,
    pub select_sql: String,
    pub update_sql: String,
    pub delete_sql: String,
}

impl<'a> Context<'a> {
    pub fn new(ty: &'a GeneratedType) -> Self {
        Self {
            ty,
            qualified_table: sql::qualified_table(ty),
            primary_key: ty.primary_key().collect(),
            non_key_fields: ty.non_key_fields().collect(),
            insert_fields: ty.insert_fields().collect(),
            returning_fields: ty.returning_fields().collect(),
            insert_sql: sql::insert(ty),
            select_sql: sql::select(ty),
            update_sql: sql::update(ty),
            delete_sql: sql::delete(ty),
        }
    }
}
