//! Four standalone type-theory declarations.
//!
//! - [`absurd`]: `Void -> a`, eliminator for the uninhabited [`Void`].
//! - [`unit`]: `a -> ()`.
//! - [`X`]: `Int`, the constant 42.
//! - [`y`]: `() -> Int`, always 42.
//!
//! Pure values only: no IO, no async, no shared state.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
mod constants;
mod unit;
mod void;

pub use catalog::{Declaration, Evaluation};
pub use constants::{X, y};
pub use unit::unit;
pub use void::{IMPOSSIBLE_MESSAGE, ImpossibleError, ResultExt, Void, absurd, absurd_ref, impossible};
