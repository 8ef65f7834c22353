//! Compile-pass harness for the Validatable derive.

#[test]
fn derive_compiles() {
    let cases = trybuild::TestCases::new();
    cases.pass("tests/ui/named_struct.rs");
    cases.pass("tests/ui/all_rules.rs");
}
