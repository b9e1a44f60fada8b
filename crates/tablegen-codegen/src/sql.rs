//! PostgreSQL statements used by the accessor methods.

use tablegen_core::{Field, GeneratedType};

pub(crate) fn qualified_table(ty: &GeneratedType) -> String {
    format!("{}.{}", ident(&ty.schema), ident(&ty.table_name))
}

pub(crate) fn insert(ty: &GeneratedType) -> String {
    let table = qualified_table(ty);
    let fields: Vec<_> = ty.insert_fields().collect();

    let mut sql = if fields.is_empty() {
        format!("INSERT INTO {table} DEFAULT VALUES")
    } else {
        format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns(&fields),
            placeholders(1, fields.len())
        )
    };

    let returning: Vec<_> = ty.returning_fields().collect();
    if !returning.is_empty() {
        sql.push_str(" RETURNING ");
        sql.push_str(&columns(&returning));
    }

    sql
}

/// `SELECT` of every column by primary key. Empty for tables without one.
pub(crate) fn select(ty: &GeneratedType) -> String {
    let key: Vec<_> = ty.primary_key().collect();
    if key.is_empty() {
        return String::new();
    }

    let all: Vec<_> = ty.fields.iter().collect();
    format!(
        "SELECT {} FROM {} WHERE {}",
        columns(&all),
        qualified_table(ty),
        conditions(&key, 1)
    )
}

/// `UPDATE` of every non-key column by primary key. Empty when there is no
/// key or nothing besides the key.
pub(crate) fn update(ty: &GeneratedType) -> String {
    let key: Vec<_> = ty.primary_key().collect();
    let rest: Vec<_> = ty.non_key_fields().collect();
    if key.is_empty() || rest.is_empty() {
        return String::new();
    }

    let assignments = rest
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{} = ${}", ident(&field.column.name), i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {}",
        qualified_table(ty),
        assignments,
        conditions(&key, rest.len() + 1)
    )
}

/// `DELETE` by primary key. Empty for tables without one.
pub(crate) fn delete(ty: &GeneratedType) -> String {
    let key: Vec<_> = ty.primary_key().collect();
    if key.is_empty() {
        return String::new();
    }

    format!(
        "DELETE FROM {} WHERE {}",
        qualified_table(ty),
        conditions(&key, 1)
    )
}

/// Quotes an identifier, doubling embedded quotes.
pub(crate) fn ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// A Rust raw string literal containing `s`, with enough `#`s to be unambiguous.
pub(crate) fn raw_literal(s: &str) -> String {
    let mut hashes = "#".to_string();
    while s.contains(&format!("\"{hashes}")) {
        hashes.push('#');
    }
    format!("r{hashes}\"{s}\"{hashes}")
}

fn columns(fields: &[&Field]) -> String {
    fields
        .iter()
        .map(|field| ident(&field.column.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholders(start: usize, len: usize) -> String {
    (start..start + len)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn conditions(key: &[&Field], start: usize) -> String {
    key.iter()
        .enumerate()
        .map(|(i, field)| format!("{} = ${}", ident(&field.column.name), start + i))
        .collect::<Vec<_>>()
        .join(" AND ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablegen_core::{
        schema::{Column, Table},
        KeyStrategy, TypeMap,
    };

    fn make_column(ordinal: i32, name: &str, data_type: &str, pk: bool) -> Column {
        Column {
            ordinal,
            name: name.to_string(),
            data_type: data_type.to_string(),
            not_null: true,
            default_value: String::new(),
            is_primary_key: pk,
        }
    }

    fn build(columns: Vec<Column>, auto_key: bool) -> GeneratedType {
        let table = Table {
            columns,
            ..Table::new("public", "users")
        };
        let keys = KeyStrategy::new().wildcard(auto_key);
        GeneratedType::build(&table, &TypeMap::postgresql(), &keys).unwrap()
    }

    fn users(auto_key: bool) -> GeneratedType {
        build(
            vec![
                make_column(1, "id", "integer", true),
                make_column(2, "email", "text", false),
                make_column(3, "nickname", "text", false),
            ],
            auto_key,
        )
    }

    #[test]
    fn insert_with_generated_key() {
        assert_eq!(
            insert(&users(true)),
            r#"INSERT INTO "public"."users" ("email", "nickname") VALUES ($1, $2) RETURNING "id""#
        );
    }

    #[test]
    fn insert_with_application_key() {
        assert_eq!(
            insert(&users(false)),
            r#"INSERT INTO "public"."users" ("id", "email", "nickname") VALUES ($1, $2, $3)"#
        );
    }

    #[test]
    fn insert_only_generated_columns() {
        let ty = build(vec![make_column(1, "id", "bigint", true)], true);
        assert_eq!(
            insert(&ty),
            r#"INSERT INTO "public"."users" DEFAULT VALUES RETURNING "id""#
        );
    }

    #[test]
    fn key_statements() {
        let ty = users(true);

        assert_eq!(
            select(&ty),
            r#"SELECT "id", "email", "nickname" FROM "public"."users" WHERE "id" = $1"#
        );
        assert_eq!(
            update(&ty),
            r#"UPDATE "public"."users" SET "email" = $1, "nickname" = $2 WHERE "id" = $3"#
        );
        assert_eq!(delete(&ty), r#"DELETE FROM "public"."users" WHERE "id" = $1"#);
    }

    #[test]
    fn composite_key_statements() {
        let ty = build(
            vec![
                make_column(1, "id", "bigint", true),
                make_column(2, "email", "text", true),
                make_column(3, "role", "text", false),
            ],
            false,
        );

        assert_eq!(
            update(&ty),
            r#"UPDATE "public"."users" SET "role" = $1 WHERE "id" = $2 AND "email" = $3"#
        );
        assert_eq!(
            delete(&ty),
            r#"DELETE FROM "public"."users" WHERE "id" = $1 AND "email" = $2"#
        );
    }

    #[test]
    fn keyless_tables_have_no_key_statements() {
        let ty = build(vec![make_column(1, "line", "text", false)], true);

        assert_eq!(select(&ty), "");
        assert_eq!(update(&ty), "");
        assert_eq!(delete(&ty), "");
    }

    #[test]
    fn raw_literals_avoid_terminators() {
        assert_eq!(raw_literal("a"), "r#\"a\"#");
        assert_eq!(raw_literal("say \"#hi\""), "r##\"say \"#hi\"\"##");
    }

    #[test]
    fn identifiers_escape_quotes() {
        assert_eq!(ident("we\"ird"), "\"we\"\"ird\"");
    }
}
