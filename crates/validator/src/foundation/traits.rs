//! The validatable capability
//!
//! Implementing [`Validatable`] opts a type into validation: it exposes
//! its field registry, and in return gets the three object-level
//! operations as provided methods. The engine also recurses into any
//! field or collection element whose value renders as
//! [`FieldValue::Nested`](super::FieldValue::Nested).
//!
//! Most types derive the implementation:
//!
//! ```rust,ignore
//! use veld_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Address {
//!     #[rule(non_blank)]
//!     street: String,
//!     #[rule(pattern("[0-9]{5}"))]
//!     zipcode: String,
//! }
//! ```
//!
//! A hand-written implementation is the static-registration alternative
//! for types the derive cannot express:
//!
//! ```rust,ignore
//! impl Validatable for Legacy {
//!     fn fields(&self) -> Fields<'_> {
//!         let mut fields = Fields::new();
//!         fields.push(FieldBinding::new("code", &[Rule::NonEmpty], &self.code));
//!         fields
//!     }
//! }
//! ```

use super::error::ValidatorError;
use super::field::Fields;
use super::invalid::InvalidFields;

/// Opt-in capability for recursive field validation.
///
/// Only [`fields`](Validatable::fields) is required; the provided methods
/// drive the validation engine over the returned registry.
pub trait Validatable {
    /// Enumerates the object's fields with their declared rules and value
    /// accessors. Called once per traversal; the returned bindings are
    /// transient.
    fn fields(&self) -> Fields<'_>;

    /// Validates the object graph rooted at `self` and returns every
    /// failing field path.
    ///
    /// Failures inside nested validatable values and collection elements
    /// appear as dotted paths (`field.child`). Rule evaluation for a
    /// field is independent of, and in addition to, recursion into its
    /// value.
    ///
    /// # Errors
    ///
    /// Only configuration defects ([`ValidatorError::Unreadable`],
    /// [`ValidatorError::NotNumeric`], [`ValidatorError::BadBound`],
    /// [`ValidatorError::BadPattern`]); data-driven failures are entries
    /// in the returned set, never errors.
    fn validate(&self) -> Result<InvalidFields, ValidatorError> {
        crate::engine::validate_fields(self.fields())
    }

    /// True when [`validate`](Validatable::validate) reports no failures.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Validatable::validate).
    fn is_valid(&self) -> Result<bool, ValidatorError> {
        Ok(self.validate()?.is_empty())
    }

    /// Rejects an invalid object with [`ValidatorError::Invalid`].
    ///
    /// The error intentionally carries no field list; callers that need
    /// detail call [`validate`](Validatable::validate) instead.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::Invalid`] when any field fails validation, plus
    /// the configuration defects of [`validate`](Validatable::validate).
    fn ensure_valid(&self) -> Result<(), ValidatorError> {
        if self.validate()?.is_empty() {
            Ok(())
        } else {
            Err(ValidatorError::Invalid)
        }
    }
}
