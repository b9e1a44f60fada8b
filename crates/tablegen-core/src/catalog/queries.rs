/// The pair of introspection queries a [`Catalog`](super::Catalog) issues.
///
/// The table query takes the schema name as `$1` and returns
/// `(kind, table_name)` for ordinary tables only. The column query takes the
/// schema name as `$1` and the table name as `$2` and returns
/// `(ordinal, column_name, data_type, not_null, default_value, is_primary_key)`
/// for live columns, ordered by ordinal.
///
/// Retargeting the generator to another engine means supplying another pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQueries {
    pub tables: &'static str,
    pub columns: &'static str,
}

impl CatalogQueries {
    pub const POSTGRESQL: Self = Self {
        tables: PG_LOAD_TABLES,
        columns: PG_LOAD_COLUMNS,
    };
}

const PG_LOAD_TABLES: &str = "
SELECT
    c.relkind::text AS kind,
    c.relname::text AS table_name
FROM pg_class c
JOIN ONLY pg_namespace n ON n.oid = c.relnamespace
WHERE n.nspname = $1
AND c.relkind = 'r'
ORDER BY c.oid
";

const PG_LOAD_COLUMNS: &str = "
SELECT
    a.attnum::int8 AS ordinal,
    a.attname::text AS column_name,
    format_type(a.atttypid, a.atttypmod) AS data_type,
    a.attnotnull AS not_null,
    COALESCE(pg_get_expr(ad.adbin, ad.adrelid), '') AS default_value,
    EXISTS (
        SELECT 1 FROM pg_constraint ct
        WHERE ct.conrelid = c.oid
        AND ct.contype = 'p'
        AND a.attnum = ANY(ct.conkey)
    ) AS is_primary_key
FROM pg_attribute a
JOIN ONLY pg_class c ON c.oid = a.attrelid
JOIN ONLY pg_namespace n ON n.oid = c.relnamespace
LEFT JOIN pg_attrdef ad ON ad.adrelid = c.oid AND ad.adnum = a.attnum
WHERE a.attisdropped = false
AND n.nspname = $1
AND c.relname = $2
AND a.attnum > 0
ORDER BY a.attnum
";
