//! Nested-object and collection traversal tests.

use pretty_assertions::assert_eq;
use veld_validator::prelude::*;

#[derive(Validatable)]
struct Address {
    #[rule(non_blank)]
    street: String,
    #[rule(pattern("[0-9]{5}"))]
    zipcode: String,
}

#[derive(Validatable)]
struct Customer {
    #[rule(non_blank)]
    name: String,
    address: Address,
}

#[derive(Validatable)]
struct Order {
    customer: Customer,
    items: Vec<LineItem>,
}

#[derive(Validatable)]
struct LineItem {
    #[rule(non_blank)]
    sku: String,
    #[rule(range(min = "1", max = "999"))]
    quantity: u32,
}

fn good_address() -> Address {
    Address {
        street: "Milk Street".to_owned(),
        zipcode: "02109".to_owned(),
    }
}

#[test]
fn nested_failures_carry_dotted_paths() {
    let customer = Customer {
        name: "Ada".to_owned(),
        address: Address {
            street: " ".to_owned(),
            zipcode: "0210".to_owned(),
        },
    };
    let invalid = customer.validate().expect("no defects");

    let paths: Vec<&str> = invalid.iter().collect();
    assert_eq!(paths, vec!["address.street", "address.zipcode"]);
}

#[test]
fn clean_nested_objects_contribute_nothing() {
    let customer = Customer {
        name: "Ada".to_owned(),
        address: good_address(),
    };
    assert!(customer.validate().expect("no defects").is_empty());
}

#[test]
fn paths_accumulate_across_levels() {
    let order = Order {
        customer: Customer {
            name: String::new(),
            address: Address {
                street: "Milk Street".to_owned(),
                zipcode: "x".to_owned(),
            },
        },
        items: Vec::new(),
    };
    let invalid = order.validate().expect("no defects");

    assert!(invalid.contains("customer.name"));
    assert!(invalid.contains("customer.address.zipcode"));
    assert_eq!(invalid.len(), 2);
}

#[test]
fn collection_elements_are_traversed() {
    let order = Order {
        customer: Customer {
            name: "Ada".to_owned(),
            address: good_address(),
        },
        items: vec![
            LineItem {
                sku: "A-1".to_owned(),
                quantity: 2,
            },
            LineItem {
                sku: "  ".to_owned(),
                quantity: 1,
            },
        ],
    };
    let invalid = order.validate().expect("no defects");
    assert!(invalid.contains("items.sku"));
    assert_eq!(invalid.len(), 1);
}

#[test]
fn identical_element_failures_collapse() {
    let order = Order {
        customer: Customer {
            name: "Ada".to_owned(),
            address: good_address(),
        },
        items: vec![
            LineItem {
                sku: String::new(),
                quantity: 1,
            },
            LineItem {
                sku: String::new(),
                quantity: 1,
            },
        ],
    };
    // Element paths are keyed by field name, not element position, and
    // set semantics fold the two failures together.
    let invalid = order.validate().expect("no defects");
    assert_eq!(invalid.len(), 1);
    assert!(invalid.contains("items.sku"));
}

#[derive(Validatable)]
struct Profile {
    #[rule(required)]
    shipping: Option<Address>,
    billing: Option<Address>,
}

#[test]
fn absent_optional_nested_values_are_not_traversed() {
    let profile = Profile {
        shipping: Some(good_address()),
        billing: None,
    };
    assert!(profile.validate().expect("no defects").is_empty());
}

#[test]
fn present_optional_nested_values_are_traversed() {
    let profile = Profile {
        shipping: None,
        billing: Some(Address {
            street: String::new(),
            zipcode: "02109".to_owned(),
        }),
    };
    let invalid = profile.validate().expect("no defects");
    assert!(invalid.contains("shipping"));
    assert!(invalid.contains("billing.street"));
    assert_eq!(invalid.len(), 2);
}

#[test]
fn non_nested_collection_elements_are_skipped() {
    #[derive(Validatable)]
    struct Tags {
        tags: Vec<String>,
    }

    let tags = Tags {
        tags: vec![String::new(), "ok".to_owned()],
    };
    assert!(tags.validate().expect("no defects").is_empty());
}
