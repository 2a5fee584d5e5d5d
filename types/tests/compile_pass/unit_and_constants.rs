use typelore_types::{ResultExt, Void, X, unit, y};

const DOUBLED: i64 = X + y();

fn main() {
    let () = unit(X);
    let () = unit("s");
    let () = unit(Some(vec![1, 2, 3]));

    let total: Result<i64, Void> = Ok(DOUBLED);
    assert_eq!(total.into_ok(), 84);
}
