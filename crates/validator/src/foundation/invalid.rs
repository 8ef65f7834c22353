//! The invalid-field set
//!
//! Validation results are an order-irrelevant set of dotted field paths:
//! a bare name (`"username"`) for a direct rule failure, or a dotted path
//! (`"address.zipcode"`) for a failure inside a nested validatable value.
//! Set semantics collapse duplicates; a field with several failing rules
//! still contributes exactly one entry.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Set of field paths that failed validation.
///
/// Built fresh per validation call and returned to the caller; no state
/// is shared across calls. Backed by a [`BTreeSet`] so iteration order is
/// deterministic even though order carries no meaning.
///
/// # Examples
///
/// ```rust,ignore
/// let invalid = account.validate()?;
/// if invalid.contains("address.zipcode") {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvalidFields {
    fields: BTreeSet<String>,
}

impl InvalidFields {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing field paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the exact path is present.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains(path)
    }

    /// Records a failing field path. Re-adding an existing path is a no-op.
    pub fn add(&mut self, path: impl Into<String>) {
        self.fields.insert(path.into());
    }

    /// Folds a nested result into this one, prefixing every path in
    /// `nested` with `field.`. An empty nested result contributes nothing.
    pub fn absorb(&mut self, field: &str, nested: Self) {
        for path in nested.fields {
            self.fields.insert(format!("{field}.{path}"));
        }
    }

    /// Iterates the failing paths in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl fmt::Display for InvalidFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for path in &self.fields {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(path)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<String> for InvalidFields {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for InvalidFields {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for InvalidFields {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a InvalidFields {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
