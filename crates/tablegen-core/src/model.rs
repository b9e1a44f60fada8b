mod field;
pub use field::Field;

mod generated_type;
pub use generated_type::GeneratedType;

mod ident;
pub use ident::{field_ident, type_ident};
