//! Error types for the validation toolkit
//!
//! Two failure classes flow through this module and must never be
//! conflated:
//!
//! 1. **Validation failures** — expected, data-driven outcomes. These are
//!    never errors; they live in [`InvalidFields`](super::InvalidFields).
//!    The single exception is [`ValidatorError::Invalid`], which
//!    [`ensure_valid`](super::ensure_valid) uses to reject an invalid
//!    object without leaking the failing field list.
//! 2. **Configuration defects** — an unreadable field, a non-numeric value
//!    under a range rule, an unparsable bound or pattern. These terminate
//!    the validation call and are never recorded as invalid fields.

use std::borrow::Cow;

use thiserror::Error;

/// A field value exists but could not be read.
///
/// Returned by [`AsFieldValue`](super::AsFieldValue) implementations whose
/// backing storage can refuse a read (an already-borrowed cell, a poisoned
/// guard). The engine wraps it with the field name and aborts the
/// validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AccessError {
    reason: Cow<'static, str>,
}

impl AccessError {
    /// Creates an access error with a human-readable reason.
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason the read failed.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors surfaced by the validation engine and facade.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The object failed validation.
    ///
    /// Only produced by [`ensure_valid`](super::ensure_valid) /
    /// [`Validatable::ensure_valid`](super::Validatable::ensure_valid).
    /// Deliberately carries no field list; callers that need detail use
    /// [`invalid_fields`](super::invalid_fields) instead.
    #[error("object failed validation")]
    Invalid,

    /// A declared field could not be read. Configuration defect.
    #[error("field `{field}` could not be read")]
    Unreadable {
        /// Name of the unreadable field.
        field: String,
        /// Why the read failed.
        #[source]
        source: AccessError,
    },

    /// A range rule met a value that is neither numeric nor a
    /// numeric-parseable string. Configuration defect, not bad data.
    #[error("field `{field}` holds non-numeric value {value} under a range rule")]
    NotNumeric {
        /// Name of the offending field.
        field: String,
        /// Rendering of the non-numeric value.
        value: String,
    },

    /// A range rule carries a bound that does not parse as a decimal.
    #[error("range bound `{bound}` on field `{field}` is not a valid decimal")]
    BadBound {
        /// Name of the field the rule is attached to.
        field: String,
        /// The bound string as declared.
        bound: String,
    },

    /// A pattern rule carries a regex that fails to compile.
    #[error("invalid pattern `{pattern}` on field `{field}`")]
    BadPattern {
        /// Name of the field the rule is attached to.
        field: String,
        /// The pattern as declared.
        pattern: String,
        /// The compilation failure.
        #[source]
        source: regex::Error,
    },
}

impl ValidatorError {
    /// True for the configuration-defect class (everything except
    /// [`ValidatorError::Invalid`]).
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    pub(crate) fn unreadable(field: &str, source: AccessError) -> Self {
        Self::Unreadable {
            field: field.to_owned(),
            source,
        }
    }

    pub(crate) fn not_numeric(field: &str, value: String) -> Self {
        Self::NotNumeric {
            field: field.to_owned(),
            value,
        }
    }

    pub(crate) fn bad_bound(field: &str, bound: &str) -> Self {
        Self::BadBound {
            field: field.to_owned(),
            bound: bound.to_owned(),
        }
    }

    pub(crate) fn bad_pattern(field: &str, pattern: &str, source: regex::Error) -> Self {
        Self::BadPattern {
            field: field.to_owned(),
            pattern: pattern.to_owned(),
            source,
        }
    }
}
