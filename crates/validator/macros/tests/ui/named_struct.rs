use veld_validator::prelude::*;

#[derive(Validatable)]
struct Plain {
    name: String,
    count: u32,
}

fn main() {
    let plain = Plain {
        name: "ok".to_owned(),
        count: 1,
    };
    let invalid = plain.validate().unwrap();
    assert!(invalid.is_empty());
}
