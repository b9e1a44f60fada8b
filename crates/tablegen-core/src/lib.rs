mod error;
pub use error::{Error, IntoError};

pub mod catalog;
pub use catalog::{Catalog, Driver};

pub mod keys;
pub use keys::KeyStrategy;

pub mod mapping;
pub use mapping::TypeMap;

pub mod model;
pub use model::{Field, GeneratedType};

pub mod schema;

/// A Result type alias that uses tablegen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
