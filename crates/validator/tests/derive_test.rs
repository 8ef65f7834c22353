//! Derive-surface tests: registries generated by `#[derive(Validatable)]`.

#![cfg(feature = "derive")]

use veld_validator::prelude::*;

#[test]
fn untagged_fields_are_enumerated_without_rules() {
    #[derive(Validatable)]
    struct Wrapper {
        label: String,
    }

    let wrapper = Wrapper {
        label: "anything".to_owned(),
    };
    let fields = wrapper.fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "label");
    assert!(fields[0].rules().is_empty());
}

#[test]
fn skipped_fields_never_reach_the_registry() {
    struct NoFieldValue;

    #[derive(Validatable)]
    struct Wrapper {
        #[rule(non_blank)]
        label: String,
        #[rule(skip)]
        handle: NoFieldValue,
    }

    let wrapper = Wrapper {
        label: "ok".to_owned(),
        handle: NoFieldValue,
    };
    let fields = wrapper.fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "label");
}

#[test]
fn declared_rules_land_on_the_binding() {
    #[derive(Validatable)]
    struct Tagged {
        #[rule(required, non_blank)]
        code: Option<String>,
    }

    let tagged = Tagged {
        code: Some("x".to_owned()),
    };
    let fields = tagged.fields();
    assert_eq!(
        fields[0].rules(),
        &[Rule::Required, Rule::NonBlank]
    );
}

#[test]
fn derive_supports_generic_structs() {
    #[derive(Validatable)]
    struct Boxed<T: AsFieldValue> {
        #[rule(required)]
        inner: Option<T>,
    }

    let present = Boxed {
        inner: Some("value".to_owned()),
    };
    assert!(present.is_valid().expect("no defects"));

    let absent: Boxed<String> = Boxed { inner: None };
    assert!(!absent.is_valid().expect("no defects"));
}

#[test]
fn derived_types_nest_through_the_generated_as_field_value() {
    #[derive(Validatable)]
    struct Leaf {
        #[rule(non_empty)]
        value: String,
    }

    #[derive(Validatable)]
    struct Tree {
        leaf: Leaf,
    }

    let tree = Tree {
        leaf: Leaf {
            value: String::new(),
        },
    };
    let invalid = tree.validate().expect("no defects");
    assert!(invalid.contains("leaf.value"));
}

#[test]
fn boxed_nested_values_are_traversed() {
    #[derive(Validatable)]
    struct Leaf {
        #[rule(non_blank)]
        value: String,
    }

    #[derive(Validatable)]
    struct Tree {
        leaf: Box<Leaf>,
    }

    let tree = Tree {
        leaf: Box::new(Leaf {
            value: " ".to_owned(),
        }),
    };
    let invalid = tree.validate().expect("no defects");
    assert!(invalid.contains("leaf.value"));
}
