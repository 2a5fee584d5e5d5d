//! Type-level checks: these programs must type-check against the public API.
//!
//! The matching "must not compile" cases live as `compile_fail` doctests on
//! `Void`, since a constructor for it cannot be written at all.

#[test]
fn public_api_type_checks() {
    let t = trybuild::TestCases::new();
    t.pass("tests/compile_pass/*.rs");
}
