//! Basic usage: declare rules on a struct, then ask it about itself.

use veld_validator::prelude::*;

#[derive(Validatable)]
struct Signup {
    #[rule(required_non_blank)]
    username: Option<String>,

    #[rule(pattern("[^@\\s]+@[^@\\s]+"))]
    email: String,

    #[rule(range(min = "13", max = "120"))]
    age: u8,
}

fn main() -> Result<(), ValidatorError> {
    let signup = Signup {
        username: Some("  ".to_owned()),
        email: "ada@example.com".to_owned(),
        age: 8,
    };

    // Boolean check.
    println!("valid: {}", signup.is_valid()?);

    // Full detail: every failing field path.
    let invalid = signup.validate()?;
    for path in invalid.iter() {
        println!("invalid field: {path}");
    }

    // Reject without detail.
    match signup.ensure_valid() {
        Ok(()) => println!("accepted"),
        Err(error) => println!("rejected: {error}"),
    }

    Ok(())
}
