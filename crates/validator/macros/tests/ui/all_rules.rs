use veld_validator::prelude::*;

#[derive(Validatable)]
struct Address {
    #[rule(non_blank)]
    street: String,
    #[rule(pattern("[0-9]{5}"))]
    zipcode: String,
}

#[derive(Validatable)]
struct Account {
    #[rule(required_non_blank)]
    username: Option<String>,
    #[rule(required)]
    email: Option<String>,
    #[rule(non_empty)]
    roles: Vec<String>,
    #[rule(range(min = "0", max = "150"))]
    age: u32,
    address: Address,
    #[rule(skip)]
    opened_at: std::time::Instant,
}

fn main() {
    let account = Account {
        username: Some("ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
        roles: vec!["admin".to_owned()],
        age: 36,
        address: Address {
            street: "Main".to_owned(),
            zipcode: "12345".to_owned(),
        },
        opened_at: std::time::Instant::now(),
    };
    assert!(account.is_valid().unwrap());
}
