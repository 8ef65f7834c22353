//! The recursive validation engine
//!
//! Walks an object's field registry, evaluates each field's declared
//! rules, recurses into nested validatable values and collection
//! elements, and aggregates dotted paths for nested failures.
//!
//! Per field, two independent contributions feed the result:
//!
//! 1. **Recursion** — a [`FieldValue::Nested`] value (or a nested element
//!    of a [`FieldValue::List`]) is validated on its own; every path in a
//!    non-empty child result lands in the parent prefixed with the field
//!    name.
//! 2. **Rule evaluation** — the field's own rules run against its own
//!    value. Any failure adds the bare field name, exactly once.
//!
//! Rule kinds are evaluated in [`RuleKind::EVAL_ORDER`] with a running
//! validity flag: `NonEmpty`/`NonBlank` only run while the flag still
//! holds, and `Range`/`Pattern` overwrite it. The interplay is part of
//! the evaluator's contract.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::{trace, warn};

use crate::foundation::{FieldValue, Fields, InvalidFields, Validatable, ValidatorError};
use crate::rules::{Rule, RuleKind};

/// Validates one object's field registry.
///
/// Fatal configuration errors abort the traversal immediately; they are
/// never recorded as invalid fields.
pub(crate) fn validate_fields(fields: Fields<'_>) -> Result<InvalidFields, ValidatorError> {
    let mut invalid = InvalidFields::new();
    trace!(fields = fields.len(), "validating object");

    for binding in &fields {
        let value = match binding.read() {
            Ok(value) => value,
            Err(source) => {
                let error = ValidatorError::unreadable(binding.name(), source);
                warn!(field = binding.name(), error = %error, "aborting validation");
                return Err(error);
            }
        };

        match &value {
            FieldValue::Nested(child) => {
                invalid.absorb(binding.name(), validate_child(binding.name(), *child)?);
            }
            FieldValue::List(items) => {
                for item in items {
                    if let FieldValue::Nested(child) = item {
                        invalid.absorb(binding.name(), validate_child(binding.name(), *child)?);
                    }
                }
            }
            _ => {}
        }

        if !is_field_valid(binding.name(), binding.rules(), &value)? {
            invalid.add(binding.name());
        }
    }

    trace!(invalid = invalid.len(), "object validated");
    Ok(invalid)
}

fn validate_child(
    field: &str,
    child: &dyn Validatable,
) -> Result<InvalidFields, ValidatorError> {
    child.validate().inspect_err(|error| {
        if error.is_configuration() {
            warn!(field, error = %error, "nested validation aborted");
        }
    })
}

/// Evaluates one field's declared rules against its current value.
///
/// Returns the final validity after the full kind-ordered pass; rules of
/// the same kind run in declaration order within their slot.
fn is_field_valid(
    name: &str,
    rules: &'static [Rule],
    value: &FieldValue<'_>,
) -> Result<bool, ValidatorError> {
    let mut valid = true;

    for kind in RuleKind::EVAL_ORDER {
        for rule in rules.iter().filter(|rule| rule.kind() == kind) {
            match *rule {
                Rule::RequiredNonBlank => match value {
                    FieldValue::Null => valid = false,
                    FieldValue::Text(text) => valid = valid && !text.trim().is_empty(),
                    _ => {}
                },
                Rule::Required => valid = valid && !value.is_null(),
                Rule::NonEmpty => {
                    if valid {
                        valid = match value {
                            FieldValue::Text(text) => !text.is_empty(),
                            FieldValue::List(items) => !items.is_empty(),
                            _ => false,
                        };
                    }
                }
                Rule::NonBlank => {
                    if valid {
                        valid = matches!(value, FieldValue::Text(text) if !text.trim().is_empty());
                    }
                }
                Rule::Range { min, max } => {
                    let actual = decimal_of(name, value)?;
                    let lo = bound_of(name, min)?;
                    let hi = bound_of(name, max)?;
                    valid = lo <= actual && actual <= hi;
                }
                Rule::Pattern { patterns } => match value {
                    FieldValue::Null => valid = false,
                    FieldValue::Text(text) => valid = matches_any(name, patterns, text)?,
                    FieldValue::List(items) => {
                        let mut all = true;
                        for item in items {
                            let FieldValue::Text(text) = item else {
                                all = false;
                                break;
                            };
                            if !matches_any(name, patterns, text)? {
                                all = false;
                                break;
                            }
                        }
                        valid = all;
                    }
                    _ => {}
                },
            }
        }
    }

    Ok(valid)
}

// ── decimal coercion ───────────────────────────────────────────────────────

fn decimal_of(field: &str, value: &FieldValue<'_>) -> Result<Decimal, ValidatorError> {
    let parsed = match value {
        FieldValue::Number(number) => number.to_decimal(),
        FieldValue::Text(text) => parse_decimal(text),
        _ => None,
    };
    parsed.ok_or_else(|| ValidatorError::not_numeric(field, value_repr(value)))
}

fn bound_of(field: &str, bound: &'static str) -> Result<Decimal, ValidatorError> {
    parse_decimal(bound).ok_or_else(|| ValidatorError::bad_bound(field, bound))
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn value_repr(value: &FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => format!("\"{text}\""),
        FieldValue::Number(number) => number.to_string(),
        other => other.kind_name().to_owned(),
    }
}

// ── pattern matching ───────────────────────────────────────────────────────

/// Compiled patterns, keyed by their declared source. Rule data is
/// `'static`, so the cache is content-addressed and insert-only: each
/// pattern compiles once per process, not once per evaluation.
static PATTERN_CACHE: LazyLock<RwLock<HashMap<&'static str, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn matches_any(
    field: &str,
    patterns: &'static [&'static str],
    text: &str,
) -> Result<bool, ValidatorError> {
    for pattern in patterns {
        if full_match(field, pattern, text)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn full_match(field: &str, pattern: &'static str, text: &str) -> Result<bool, ValidatorError> {
    if let Some(regex) = PATTERN_CACHE.read().get(pattern) {
        return Ok(regex.is_match(text));
    }

    // The declared pattern must cover the whole string, not a substring.
    let regex = Regex::new(&format!(r"\A(?:{pattern})\z"))
        .map_err(|source| ValidatorError::bad_pattern(field, pattern, source))?;
    let is_match = regex.is_match(text);
    PATTERN_CACHE.write().insert(pattern, regex);
    Ok(is_match)
}

// ============================================================================
// TESTS
// ============================================================================
