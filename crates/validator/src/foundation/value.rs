//! Dynamic field-value model
//!
//! Rules are declared against fields of arbitrary types, so the engine
//! evaluates them against [`FieldValue`], a borrowed, dynamically-typed
//! view of a field's current value. [`AsFieldValue`] is the conversion
//! seam: every field type that participates in validation renders itself
//! into the view, and guarded containers may refuse the read with an
//! [`AccessError`] (which the engine treats as a fatal configuration
//! error, never as a validation failure).
//!
//! Implementations are provided for strings, primitive numbers, `Option`,
//! the common `std` collections, smart pointers, and `serde_json::Value`.
//! Deriving `Validatable` on a struct also derives `AsFieldValue`, so the
//! struct renders as [`FieldValue::Nested`] wherever it appears as a field
//! or collection element.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::AccessError;
use super::traits::Validatable;

/// Numeric field data.
///
/// Integers are kept exact; floats are carried as-is and only rendered to
/// a decimal when a range rule needs them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer data.
    Int(i64),
    /// Unsigned integer data beyond `i64` range.
    UInt(u64),
    /// Floating-point data.
    Float(f64),
}

impl Number {
    /// Renders the number as an exact decimal, if representable.
    ///
    /// Floats go through their shortest display form first, so `0.1`
    /// compares as exactly `0.1` rather than its binary expansion.
    /// `NaN`, infinities, and magnitudes beyond [`Decimal`] range yield
    /// `None`.
    pub(crate) fn to_decimal(self) -> Option<Decimal> {
        match self {
            Self::Int(int) => Some(Decimal::from(int)),
            Self::UInt(uint) => Some(Decimal::from(uint)),
            Self::Float(float) => {
                let shortest = format!("{float}");
                Decimal::from_str(&shortest).ok()
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::UInt(uint) => write!(f, "{uint}"),
            Self::Float(float) => write!(f, "{float}"),
        }
    }
}

/// Borrowed view of one field's current value.
pub enum FieldValue<'a> {
    /// Absent value (`None`, JSON null).
    Null,
    /// String-like data.
    Text(Cow<'a, str>),
    /// Numeric data.
    Number(Number),
    /// Collection data; elements are rendered recursively.
    List(Vec<FieldValue<'a>>),
    /// A nested object that opted into recursive validation.
    Nested(&'a dyn Validatable),
    /// Anything else. Rules can reject it; nothing inspects it.
    Opaque,
}

impl FieldValue<'_> {
    /// True for [`FieldValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value's shape, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::List(_) => "list",
            Self::Nested(_) => "object",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Nested(_) => f.write_str("Nested(..)"),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Renders a field's current value into the engine's dynamic view.
///
/// The read is fallible by contract: implementations over guarded storage
/// (cells, locks) return [`AccessError`] when the value cannot be read,
/// and the engine reports that as a fatal configuration error. All
/// implementations shipped with this crate are infallible reads.
pub trait AsFieldValue {
    /// Reads the current value.
    ///
    /// # Errors
    ///
    /// [`AccessError`] when the value exists but cannot be read.
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError>;
}

// ── strings ────────────────────────────────────────────────────────────────

impl AsFieldValue for str {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Text(Cow::Borrowed(self)))
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Text(Cow::Borrowed(self.as_str())))
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Text(Cow::Borrowed(self.as_ref())))
    }
}

// ── numbers ────────────────────────────────────────────────────────────────

macro_rules! number_field_value {
    ($($ty:ty => $variant:ident via $wide:ty),* $(,)?) => {$(
        impl AsFieldValue for $ty {
            fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
                Ok(FieldValue::Number(Number::$variant(<$wide>::from(*self))))
            }
        }
    )*};
}

number_field_value! {
    i8 => Int via i64,
    i16 => Int via i64,
    i32 => Int via i64,
    i64 => Int via i64,
    u8 => UInt via u64,
    u16 => UInt via u64,
    u32 => UInt via u64,
    u64 => UInt via u64,
    f32 => Float via f64,
    f64 => Float via f64,
}

impl AsFieldValue for isize {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Number(Number::Int(*self as i64)))
    }
}

impl AsFieldValue for usize {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Number(Number::UInt(*self as u64)))
    }
}

// ── non-text, non-numeric scalars ──────────────────────────────────────────

impl AsFieldValue for bool {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Opaque)
    }
}

impl AsFieldValue for char {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(FieldValue::Opaque)
    }
}

// ── optionality ────────────────────────────────────────────────────────────

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        match self {
            Some(value) => value.as_field_value(),
            None => Ok(FieldValue::Null),
        }
    }
}

// ── collections ────────────────────────────────────────────────────────────

fn collect_list<'a, T, I>(items: I) -> Result<FieldValue<'a>, AccessError>
where
    T: AsFieldValue + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut list = Vec::new();
    for item in items {
        list.push(item.as_field_value()?);
    }
    Ok(FieldValue::List(list))
}

impl<T: AsFieldValue> AsFieldValue for [T] {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        collect_list(self.iter())
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        collect_list(self.iter())
    }
}

impl<T: AsFieldValue> AsFieldValue for VecDeque<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        collect_list(self.iter())
    }
}

impl<T: AsFieldValue> AsFieldValue for BTreeSet<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        collect_list(self.iter())
    }
}

impl<T: AsFieldValue, S> AsFieldValue for HashSet<T, S> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        collect_list(self.iter())
    }
}

// ── references and smart pointers ──────────────────────────────────────────

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Rc<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Arc<T> {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        (**self).as_field_value()
    }
}

// ── JSON ───────────────────────────────────────────────────────────────────

impl AsFieldValue for serde_json::Value {
    fn as_field_value(&self) -> Result<FieldValue<'_>, AccessError> {
        Ok(match self {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::String(text) => FieldValue::Text(Cow::Borrowed(text)),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    FieldValue::Number(Number::Int(int))
                } else if let Some(uint) = number.as_u64() {
                    FieldValue::Number(Number::UInt(uint))
                } else if let Some(float) = number.as_f64() {
                    FieldValue::Number(Number::Float(float))
                } else {
                    FieldValue::Opaque
                }
            }
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(item.as_field_value()?);
                }
                FieldValue::List(list)
            }
            serde_json::Value::Bool(_) | serde_json::Value::Object(_) => FieldValue::Opaque,
        })
    }
}
