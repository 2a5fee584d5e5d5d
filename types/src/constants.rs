//! `x :: Int` and `y :: () -> Int`.

/// Bound once, never changes.
pub const X: i64 = 42;

/// Returns 42 on every call.
#[must_use]
#[inline]
pub const fn y() -> i64 {
    42
}

#[cfg(test)]
mod tests {
    use super::{X, y};

    #[test]
    fn x_is_42() {
        assert_eq!(X, 42);
    }

    #[test]
    fn y_is_deterministic() {
        let calls = [y(), y(), y()];
        assert_eq!(calls, [42, 42, 42]);
        assert!((0..1_000).map(|_| y()).all(|v| v == 42));
    }

    #[test]
    fn y_is_usable_in_const_context() {
        const FROM_Y: i64 = y();
        assert_eq!(FROM_Y, X);
    }
}
