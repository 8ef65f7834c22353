//! Property-based tests for veld-validator.

use proptest::prelude::*;
use veld_validator::prelude::*;

#[derive(Debug, Validatable)]
struct Subject {
    #[rule(non_blank)]
    name: String,
    #[rule(range(min = "0", max = "10"))]
    level: i64,
    #[rule(pattern("^[a-z]+$"))]
    tags: Vec<String>,
}

fn subject_strategy() -> impl Strategy<Value = Subject> {
    (
        ".{0,12}",
        -100_i64..=100,
        prop::collection::vec("[a-z0-9]{0,6}", 0..4),
    )
        .prop_map(|(name, level, tags)| Subject { name, level, tags })
}

// ============================================================================
// STABILITY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_stable(subject in subject_strategy()) {
        let first = subject.validate().expect("no defects");
        let second = subject.validate().expect("no defects");
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// RANGE: integer membership matches the declared interval
// ============================================================================

proptest! {
    #[test]
    fn integer_range_matches_interval(level in -100_i64..=100) {
        let subject = Subject {
            name: "ok".to_owned(),
            level,
            tags: Vec::new(),
        };
        let invalid = subject.validate().expect("no defects");
        prop_assert_eq!(invalid.contains("level"), !(0..=10).contains(&level));
    }
}

// ============================================================================
// PATTERN: a list fails iff some element misses every pattern
// ============================================================================

proptest! {
    #[test]
    fn list_pattern_matches_elementwise(tags in prop::collection::vec("[a-z0-9]{0,6}", 0..6)) {
        let any_miss = tags
            .iter()
            .any(|tag| tag.is_empty() || tag.chars().any(|c| c.is_ascii_digit()));
        let subject = Subject {
            name: "ok".to_owned(),
            level: 5,
            tags,
        };
        let invalid = subject.validate().expect("no defects");
        prop_assert_eq!(invalid.contains("tags"), any_miss);
    }
}

// ============================================================================
// ENTRY UNIQUENESS: result size never exceeds the field count here
// ============================================================================

proptest! {
    #[test]
    fn one_entry_per_field_at_most(subject in subject_strategy()) {
        let invalid = subject.validate().expect("no defects");
        prop_assert!(invalid.len() <= 3);
    }
}
