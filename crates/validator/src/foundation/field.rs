//! Field bindings
//!
//! A [`FieldBinding`] is the engine's view of one field of one object:
//! its name, the rules declared on it, and an accessor for its current
//! value. Bindings are produced fresh for each traversal by
//! [`Validatable::fields`](super::Validatable::fields) and never outlive
//! the validation call.

use std::fmt;

use smallvec::SmallVec;

use super::error::AccessError;
use super::value::{AsFieldValue, FieldValue};
use crate::rules::Rule;

/// Per-object field list.
///
/// Inlined up to eight bindings; the common traversal does not allocate.
pub type Fields<'a> = SmallVec<[FieldBinding<'a>; 8]>;

/// One field of one object: name, declared rules, value accessor.
#[derive(Clone, Copy)]
pub struct FieldBinding<'a> {
    name: &'static str,
    rules: &'static [Rule],
    value: &'a dyn AsFieldValue,
}

impl<'a> FieldBinding<'a> {
    /// Binds a field name and its declared rules to a value accessor.
    pub fn new(name: &'static str, rules: &'static [Rule], value: &'a dyn AsFieldValue) -> Self {
        Self { name, rules, value }
    }

    /// The field's name as it appears in result paths.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rules declared on this field.
    #[must_use]
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Reads the field's current value.
    ///
    /// # Errors
    ///
    /// [`AccessError`] when the accessor refuses the read; the engine
    /// reports this as a fatal configuration error.
    pub fn read(&self) -> Result<FieldValue<'a>, AccessError> {
        self.value.as_field_value()
    }
}

impl fmt::Debug for FieldBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .field("value", &"<accessor>")
            .finish()
    }
}
