//! Prelude module for convenient imports.
//!
//! Provides a single `use veld_validator::prelude::*;` import that brings
//! in the capability trait, the value and binding types, the rule
//! declarations, and the object-level entry points.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veld_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Comment {
//!     #[rule(required_non_blank)]
//!     body: Option<String>,
//! }
//!
//! let comment = Comment { body: None };
//! assert!(!comment.is_valid()?);
//! ```

// ============================================================================
// FOUNDATION: capability, values, bindings, results, errors
// ============================================================================

pub use crate::foundation::{
    AccessError, AsFieldValue, FieldBinding, FieldValue, Fields, InvalidFields, Number,
    Validatable, ValidatorError, ensure_valid, invalid_fields, is_valid,
};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{Rule, RuleKind};

// ============================================================================
// DERIVE-GATED: #[derive(Validatable)]
// ============================================================================

#[cfg(feature = "derive")]
pub use veld_validator_macros::Validatable;
