//! # veld-validator
//!
//! Declarative field validation with nested object traversal.
//!
//! A type opts in by implementing [`Validatable`](foundation::Validatable)
//! (usually via `#[derive(Validatable)]`), which exposes a registry of field
//! bindings: field name, declared [`Rule`](rules::Rule)s, and a value
//! accessor. The engine walks the registry, evaluates each field's rules,
//! recurses into nested validatable values and collection elements, and
//! reports the set of invalid dotted field paths.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use veld_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Signup {
//!     #[rule(non_blank)]
//!     username: String,
//!     #[rule(range(min = "13", max = "120"))]
//!     age: u8,
//! }
//!
//! let signup = Signup { username: "  ".into(), age: 8 };
//! let invalid = signup.validate()?;
//! assert!(invalid.contains("username"));
//! assert!(invalid.contains("age"));
//! ```
//!
//! ## Two failure classes
//!
//! Validation failures are expected, data-driven outcomes and are reported
//! purely as entries in [`InvalidFields`](foundation::InvalidFields).
//! Defects in the validation setup (an unreadable field, a non-numeric
//! value under a range rule, an unparsable bound, an invalid pattern) are
//! fatal [`ValidatorError`](foundation::ValidatorError)s that terminate the
//! call and never masquerade as bad data.

mod engine;
pub mod foundation;
pub mod prelude;
pub mod rules;
