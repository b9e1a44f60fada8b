use crate::{Error, Result};

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Derives a Rust field identifier from a column name.
///
/// `createdAt` and `Created At` both become `created_at`. Keywords are turned
/// into raw identifiers (`type` becomes `r#type`).
pub fn field_ident(name: &str) -> Result<String> {
    validate(name, name.to_snake_case())
}

/// Derives a Rust type identifier from a table name.
pub fn type_ident(name: &str) -> Result<String> {
    validate(name, name.to_upper_camel_case())
}

fn validate(src: &str, ident: String) -> Result<String> {
    if ident.is_empty() {
        return Err(Error::field_resolution(src, "no identifier characters"));
    }

    if syn::parse_str::<syn::Ident>(&ident).is_ok() {
        return Ok(ident);
    }

    // Keywords that can be raw identifiers. `self`, `super`, `crate`, `Self`
    // and `_` cannot, and neither can anything starting with a digit.
    let raw = format!("r#{ident}");
    if syn::parse_str::<syn::Ident>(&raw).is_ok() {
        return Ok(raw);
    }

    Err(Error::field_resolution(
        src,
        format!("`{ident}` is not a valid Rust identifier"),
    ))
}
