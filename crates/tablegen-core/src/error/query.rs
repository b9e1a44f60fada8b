use super::Error;

/// Error from the query executor, or a catalog row that does not have the
/// expected shape.
#[derive(Debug)]
pub(super) enum QueryError {
    Driver(Box<dyn std::error::Error + Send + Sync>),
    InvalidRow(Box<str>),
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Driver(inner) => Some(inner.as_ref()),
            QueryError::InvalidRow(_) => None,
        }
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            QueryError::Driver(inner) => {
                write!(f, "query failed: {inner}")?;
                let mut source = inner.source();
                while let Some(err) = source {
                    write!(f, ": {}", err)?;
                    source = err.source();
                }
                Ok(())
            }
            QueryError::InvalidRow(message) => write!(f, "invalid catalog row: {message}"),
        }
    }
}

impl Error {
    /// Creates an error from a query executor error.
    ///
    /// This is the preferred way to convert driver-specific errors (postgres
    /// client errors, connection errors) into tablegen errors.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Query(QueryError::Driver(Box::new(err))))
    }

    /// Creates an error for a catalog row with an unexpected shape.
    pub fn invalid_row(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Query(QueryError::InvalidRow(
            message.into().into(),
        )))
    }

    /// Returns `true` if this error, or any error it wraps, is a query error.
    pub fn is_query(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Query(_)))
    }
}
