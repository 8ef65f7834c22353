//! Derive macros for `veld-validator`
//!
//! Provides `#[derive(Validatable)]`, which turns `#[rule(...)]` field
//! attributes into the field registry the validation engine traverses.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veld_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Account {
//!     #[rule(required_non_blank)]
//!     username: Option<String>,
//!
//!     #[rule(range(min = "0", max = "150"))]
//!     age: u32,
//!
//!     #[rule(pattern("^[a-z]+$"))]
//!     tags: Vec<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod validatable;

/// Derives the `Validatable` capability for a struct with named fields.
///
/// Also derives `AsFieldValue`, so the struct renders as a nested value
/// wherever it appears as a field or collection element of another
/// validatable type.
///
/// # Attributes
///
/// Rules are declared per field with `#[rule(...)]`:
///
/// - `required` — value must not be null
/// - `non_empty` — text/list must be non-empty; other types fail
/// - `non_blank` — text must have non-whitespace content; other types fail
/// - `required_non_blank` — not null, and non-blank when text
/// - `range(min = "0", max = "10")` — inclusive decimal range;
///   bounds are string-encoded to keep exact decimal semantics
/// - `pattern("^a.*", ...)` — full match against at least one pattern
/// - `skip` — leave the field out of the registry entirely
///
/// Fields without a `#[rule(...)]` attribute carry no rules but are
/// still enumerated, so nested validatable values keep being traversed.
#[proc_macro_derive(Validatable, attributes(rule))]
pub fn derive_validatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    validatable::derive(&input)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}
