//! The uninhabited type and its eliminator.
//!
//! `Void` has no variants, so no value of it can ever be constructed. Holding a
//! `Void` is a proof that the surrounding code is unreachable, and [`absurd`]
//! turns that proof into a value of whatever type the caller needs.

use std::convert::Infallible;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Message carried by every "impossible state" failure.
pub const IMPOSSIBLE_MESSAGE: &str = "Impossible: Void has no values.";

/// A type with no values.
///
/// # Invariants
///
/// - No constructor exists; `Void` cannot be named as a value in safe code.
/// - Every `match` on a `Void` is exhaustive with zero arms.
///
/// There is no variant to name:
///
/// ```compile_fail
/// let v = typelore_types::Void::Value;
/// ```
///
/// and no struct-style literal either:
///
/// ```compile_fail
/// let v = typelore_types::Void {};
/// ```
///
/// A match with zero arms is accepted:
///
/// ```
/// use typelore_types::Void;
///
/// fn describe(v: Void) -> &'static str {
///     match v {}
/// }
/// # let _ = describe;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Void {}

/// Raised when something tries to materialize a [`Void`] from outside the
/// type system, e.g. by deserializing one.
///
/// The message must stay equal to [`IMPOSSIBLE_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Impossible: Void has no values.")]
pub struct ImpossibleError;

/// Eliminate a `Void` into any type.
///
/// `Void -> a`. The body has no reachable path: a caller can only supply the
/// argument from code the compiler already knows is dead.
#[inline]
pub fn absurd<A>(v: Void) -> A {
    match v {}
}

/// Like [`absurd`], but through a shared reference.
#[inline]
pub fn absurd_ref<A>(v: &Void) -> A {
    match *v {}
}

/// Fatal "impossible state" path.
///
/// For branches that logic rules out but the type system cannot. Reaching this
/// is a soundness bug in the caller, so it panics instead of returning an
/// error. Teaching artifact; do not catch it.
#[cold]
#[track_caller]
pub fn impossible(context: impl fmt::Display) -> ! {
    panic!("{IMPOSSIBLE_MESSAGE} ({context})")
}

impl Void {
    /// Method form of [`absurd`].
    #[inline]
    pub fn absurd<A>(self) -> A {
        absurd(self)
    }
}

impl fmt::Debug for Void {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        absurd_ref(self)
    }
}

impl fmt::Display for Void {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        absurd_ref(self)
    }
}

impl std::error::Error for Void {}

impl From<Infallible> for Void {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl From<Void> for Infallible {
    fn from(value: Void) -> Self {
        absurd(value)
    }
}

impl Serialize for Void {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        absurd_ref(self)
    }
}

/// Every input is rejected: there is nothing a `Void` could deserialize into.
impl<'de> Deserialize<'de> for Void {
    fn deserialize<D: Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        Err(D::Error::custom(ImpossibleError))
    }
}

/// Total unwrapping for results whose error side is uninhabited.
pub trait ResultExt<T> {
    fn into_ok(self) -> T;
}

impl<T> ResultExt<T> for Result<T, Void> {
    #[inline]
    fn into_ok(self) -> T {
        match self {
            Ok(value) => value,
            Err(v) => absurd(v),
        }
    }
}

impl<T> ResultExt<T> for Result<T, Infallible> {
    #[inline]
    fn into_ok(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}
