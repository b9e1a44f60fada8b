use crate::{Error, Result};

use std::fmt::Debug;

/// An opaque, synchronous query executor.
///
/// The catalog loader only needs to run read-only queries with text
/// arguments, so this is all a database driver has to provide.
pub trait Driver: Debug {
    /// Runs `sql` with positional text arguments and returns every row.
    fn query(&mut self, sql: &str, args: &[&str]) -> Result<Vec<Row>>;
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn query(&mut self, sql: &str, args: &[&str]) -> Result<Vec<Row>> {
        (**self).query(sql, args)
    }
}

/// A value in a catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    String(String),
}

/// One row returned by a [`Driver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn from_vec(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            Error::invalid_row(format!(
                "expected at least {} values, got {}",
                index + 1,
                self.values.len()
            ))
        })
    }

    pub fn get_i64(&self, index: usize) -> Result<i64> {
        match self.get(index)? {
            Value::I64(v) => Ok(*v),
            other => Err(mismatch(index, "integer", other)),
        }
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        match self.get(index)? {
            Value::Bool(v) => Ok(*v),
            other => Err(mismatch(index, "boolean", other)),
        }
    }

    pub fn get_str(&self, index: usize) -> Result<&str> {
        match self.get(index)? {
            Value::String(v) => Ok(v),
            other => Err(mismatch(index, "text", other)),
        }
    }

    pub fn get_opt_str(&self, index: usize) -> Result<Option<&str>> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::String(v) => Ok(Some(v)),
            other => Err(mismatch(index, "text", other)),
        }
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::from_vec(values)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

fn mismatch(index: usize, expected: &str, actual: &Value) -> Error {
    Error::invalid_row(format!(
        "expected {expected} at position {index}, got {actual:?}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let row = Row::from_vec(vec![
            Value::I64(3),
            "email".into(),
            true.into(),
            Value::Null,
        ]);

        assert_eq!(row.get_i64(0).unwrap(), 3);
        assert_eq!(row.get_str(1).unwrap(), "email");
        assert!(row.get_bool(2).unwrap());
        assert_eq!(row.get_opt_str(3).unwrap(), None);
        assert_eq!(row.get_opt_str(1).unwrap(), Some("email"));
    }

    #[test]
    fn shape_mismatch_is_a_query_error() {
        let row = Row::from_vec(vec!["not a number".into()]);

        let err = row.get_i64(0).unwrap_err();
        assert!(err.is_query());
        assert_eq!(
            err.to_string(),
            "invalid catalog row: expected integer at position 0, got String(\"not a number\")"
        );

        let err = row.get_bool(4).unwrap_err();
        assert!(err.is_query());
        assert_eq!(
            err.to_string(),
            "invalid catalog row: expected at least 5 values, got 1"
        );
    }
}
