//! Core validation types and traits
//!
//! This module contains the building blocks of the validation system:
//!
//! - **Capability**: [`Validatable`]
//! - **Values**: [`FieldValue`], [`Number`], [`AsFieldValue`]
//! - **Bindings**: [`FieldBinding`], [`Fields`]
//! - **Results**: [`InvalidFields`]
//! - **Errors**: [`ValidatorError`], [`AccessError`]
//!
//! # Architecture
//!
//! ## 1. Explicit field registries
//!
//! There is no runtime reflection: a type that wants validation exposes
//! its own field registry through [`Validatable::fields`], built from the
//! declarations on the type (usually the `#[derive(Validatable)]`
//! attributes). The engine only ever sees bindings.
//!
//! ## 2. Dynamic values behind a typed seam
//!
//! Rules are evaluated against [`FieldValue`], a borrowed dynamic view.
//! [`AsFieldValue`] renders each concrete field type into that view, and
//! is the one place a read may fail; failures surface as a fatal
//! configuration error, never as a validation failure.
//!
//! ## 3. Failures are data
//!
//! A failing field is an entry in [`InvalidFields`]; the engine itself
//! never errors on bad data. [`ValidatorError`] is reserved for defects
//! in the validation setup (plus the deliberately detail-free
//! [`ValidatorError::Invalid`] used by [`ensure_valid`]).

// Module declarations
pub mod error;
pub mod field;
pub mod invalid;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use error::{AccessError, ValidatorError};
pub use field::{FieldBinding, Fields};
pub use invalid::InvalidFields;
pub use traits::Validatable;
pub use value::{AsFieldValue, FieldValue, Number};

// ============================================================================
// OBJECT-LEVEL ENTRY POINTS
// ============================================================================

/// Checks whether an optional target validates cleanly.
///
/// `None` is not itself a violation at this layer: "no object" yields
/// `true`. Callers that require presence wrap with their own check.
///
/// # Errors
///
/// Configuration defects only; see [`Validatable::validate`].
pub fn is_valid<T>(target: Option<&T>) -> Result<bool, ValidatorError>
where
    T: Validatable + ?Sized,
{
    match target {
        Some(object) => object.is_valid(),
        None => Ok(true),
    }
}

/// Rejects an invalid target with [`ValidatorError::Invalid`].
///
/// `None` passes (see [`is_valid`]). The error deliberately carries no
/// field list; use [`invalid_fields`] for detail.
///
/// # Errors
///
/// [`ValidatorError::Invalid`] on a failing object, plus the
/// configuration defects of [`Validatable::validate`].
pub fn ensure_valid<T>(target: Option<&T>) -> Result<(), ValidatorError>
where
    T: Validatable + ?Sized,
{
    match target {
        Some(object) => object.ensure_valid(),
        None => Ok(()),
    }
}

/// Returns every failing field path of an optional target.
///
/// `None` yields an empty set.
///
/// # Errors
///
/// Configuration defects only; see [`Validatable::validate`].
pub fn invalid_fields<T>(target: Option<&T>) -> Result<InvalidFields, ValidatorError>
where
    T: Validatable + ?Sized,
{
    match target {
        Some(object) => object.validate(),
        None => Ok(InvalidFields::new()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod foundation_tests {
    use super::*;
    use crate::rules::Rule;

    struct Ticket {
        code: String,
    }

    impl Validatable for Ticket {
        fn fields(&self) -> Fields<'_> {
            let mut fields = Fields::new();
            fields.push(FieldBinding::new("code", &[Rule::NonBlank], &self.code));
            fields
        }
    }

    #[test]
    fn absent_target_is_valid() {
        let target: Option<&Ticket> = None;
        assert!(is_valid(target).expect("no defects"));
        assert!(ensure_valid(target).is_ok());
        assert!(invalid_fields(target).expect("no defects").is_empty());
    }

    #[test]
    fn present_target_is_validated() {
        let ticket = Ticket {
            code: "  ".to_owned(),
        };
        assert!(!is_valid(Some(&ticket)).expect("no defects"));

        let invalid = invalid_fields(Some(&ticket)).expect("no defects");
        assert!(invalid.contains("code"));
    }

    #[test]
    fn ensure_valid_hides_detail() {
        let ticket = Ticket {
            code: String::new(),
        };
        let error = ensure_valid(Some(&ticket)).expect_err("must fail");
        assert!(matches!(error, ValidatorError::Invalid));
        assert!(!error.is_configuration());
    }
}
