//! Nested traversal: failures inside nested values and collection
//! elements come back as dotted paths.

use veld_validator::prelude::*;

#[derive(Validatable)]
struct Address {
    #[rule(non_blank)]
    street: String,

    #[rule(pattern("[0-9]{5}"))]
    zipcode: String,
}

#[derive(Validatable)]
struct LineItem {
    #[rule(non_blank)]
    sku: String,

    #[rule(range(min = "1", max = "999"))]
    quantity: u32,
}

#[derive(Validatable)]
struct Order {
    #[rule(required_non_blank)]
    reference: Option<String>,

    shipping: Address,

    items: Vec<LineItem>,
}

fn main() -> Result<(), ValidatorError> {
    let order = Order {
        reference: None,
        shipping: Address {
            street: "Milk Street".to_owned(),
            zipcode: "0210".to_owned(),
        },
        items: vec![
            LineItem {
                sku: "A-1".to_owned(),
                quantity: 2,
            },
            LineItem {
                sku: "".to_owned(),
                quantity: 1,
            },
        ],
    };

    let invalid = order.validate()?;
    // Prints: invalid: items.sku, reference, shipping.zipcode
    println!("invalid: {invalid}");

    Ok(())
}
