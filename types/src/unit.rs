/// Discard any value and return the no-value result.
///
/// `a -> ()`. The argument is moved in and dropped.
#[inline]
pub fn unit<A>(value: A) {
    drop(value);
}
