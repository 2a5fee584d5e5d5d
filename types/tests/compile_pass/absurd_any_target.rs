use typelore_types::{Void, absurd, absurd_ref};

fn to_string(v: Void) -> String {
    absurd(v)
}

fn to_pair(v: &Void) -> (u8, Vec<bool>) {
    absurd_ref(v)
}

fn main() {
    let parsed: Result<u32, Void> = Ok(42);
    let value: u32 = parsed.unwrap_or_else(absurd);
    assert_eq!(value, 42);

    let _: fn(Void) -> String = to_string;
    let _: fn(&Void) -> (u8, Vec<bool>) = to_pair;
}
