//! Declarative field rules
//!
//! A [`Rule`] is an immutable constraint attached to a field at
//! definition time: via `#[rule(...)]` attributes on a derived
//! [`Validatable`](crate::foundation::Validatable), or as `const` slices
//! in a hand-written registry. Rule data is `'static` by design: the
//! declaration surface is compile-time metadata, mirroring how the rules
//! appear in source.
//!
//! A field may carry zero or more rules. Evaluation happens in a fixed
//! kind order regardless of declaration order (see
//! [`RuleKind::EVAL_ORDER`]); the engine documents how the kinds interact.

/// One declared constraint on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Value must not be null.
    Required,
    /// Text or list value must be non-empty. Any other value, including
    /// null and plain numbers, fails the rule outright.
    NonEmpty,
    /// Text value must contain non-whitespace characters. Any other
    /// value fails the rule outright.
    NonBlank,
    /// Value must not be null; if it is text, it must additionally
    /// contain non-whitespace characters. Non-text values pass the
    /// second half untouched.
    RequiredNonBlank,
    /// Numeric value (or numeric-parseable text) must fall within the
    /// inclusive `[min, max]` range. Bounds are string-encoded decimals
    /// so exact decimal semantics survive the declaration.
    Range {
        /// Inclusive lower bound, as a decimal string.
        min: &'static str,
        /// Inclusive upper bound, as a decimal string.
        max: &'static str,
    },
    /// Text value must fully match at least one of the patterns; a list
    /// value must consist of text elements that each fully match at
    /// least one pattern. Null fails; other value shapes leave the
    /// field's running validity untouched.
    Pattern {
        /// Ordered, non-empty list of regex patterns.
        patterns: &'static [&'static str],
    },
}

impl Rule {
    /// The rule's kind, used to dispatch evaluation.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required => RuleKind::Required,
            Self::NonEmpty => RuleKind::NonEmpty,
            Self::NonBlank => RuleKind::NonBlank,
            Self::RequiredNonBlank => RuleKind::RequiredNonBlank,
            Self::Range { .. } => RuleKind::Range,
            Self::Pattern { .. } => RuleKind::Pattern,
        }
    }
}

/// The six rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// [`Rule::RequiredNonBlank`]
    RequiredNonBlank,
    /// [`Rule::Required`]
    Required,
    /// [`Rule::NonEmpty`]
    NonEmpty,
    /// [`Rule::NonBlank`]
    NonBlank,
    /// [`Rule::Range`]
    Range,
    /// [`Rule::Pattern`]
    Pattern,
}

impl RuleKind {
    /// Fixed evaluation order for a field's rules.
    ///
    /// Kinds are not independent short-circuits: `NonEmpty` and
    /// `NonBlank` only run while the field is still considered valid,
    /// while `Range` and `Pattern` overwrite the running result. The
    /// order is therefore part of the contract, not an implementation
    /// detail.
    pub const EVAL_ORDER: [Self; 6] = [
        Self::RequiredNonBlank,
        Self::Required,
        Self::NonEmpty,
        Self::NonBlank,
        Self::Range,
        Self::Pattern,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Rule::Required.kind(), RuleKind::Required);
        assert_eq!(
            Rule::Range { min: "0", max: "1" }.kind(),
            RuleKind::Range
        );
        assert_eq!(
            Rule::Pattern { patterns: &["a"] }.kind(),
            RuleKind::Pattern
        );
    }

    #[test]
    fn eval_order_covers_every_kind_once() {
        let order = RuleKind::EVAL_ORDER;
        for kind in order {
            assert_eq!(order.iter().filter(|k| **k == kind).count(), 1);
        }
    }

    #[test]
    fn rules_are_const_constructible() {
        const RULES: &[Rule] = &[
            Rule::RequiredNonBlank,
            Rule::Range { min: "0", max: "10" },
            Rule::Pattern { patterns: &["^a.*"] },
        ];
        assert_eq!(RULES.len(), 3);
    }
}
