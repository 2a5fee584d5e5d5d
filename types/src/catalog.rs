//! Named index of the declarations, for reporting.

use std::fmt;

use serde::Serialize;

use crate::{X, unit, y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Declaration {
    Absurd,
    Unit,
    X,
    Y,
}

/// Result of evaluating a [`Declaration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Evaluation {
    /// The declaration consumes a `Void`, so there is nothing to call it with.
    Uninhabited,
    /// The declaration was called and produced `()`.
    Unit,
    Constant(i64),
    /// Results of repeated zero-argument calls, in order.
    Calls(Vec<i64>),
}

impl Declaration {
    pub const ALL: [Declaration; 4] = [
        Declaration::Absurd,
        Declaration::Unit,
        Declaration::X,
        Declaration::Y,
    ];

    /// Most `y` invocations a single evaluation performs.
    pub const MAX_CALLS: usize = 1024;

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Declaration::Absurd => "absurd",
            Declaration::Unit => "unit",
            Declaration::X => "x",
            Declaration::Y => "y",
        }
    }

    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            Declaration::Absurd => "Void -> a",
            Declaration::Unit => "a -> ()",
            Declaration::X => "Int",
            Declaration::Y => "() -> Int",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Declaration::Absurd => "eliminates the uninhabited type into any type",
            Declaration::Unit => "discards its argument",
            Declaration::X => "constant bound once",
            Declaration::Y => "zero-argument function returning a constant",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|decl| decl.name() == name)
    }

    /// Evaluate the declaration. `y_calls` is how many times `y` is invoked,
    /// capped at [`Self::MAX_CALLS`].
    #[must_use]
    pub fn evaluate(self, y_calls: usize) -> Evaluation {
        match self {
            Declaration::Absurd => Evaluation::Uninhabited,
            Declaration::Unit => {
                let () = unit(X);
                Evaluation::Unit
            }
            Declaration::X => Evaluation::Constant(X),
            Declaration::Y => {
                let calls = y_calls.min(Self::MAX_CALLS);
                Evaluation::Calls((0..calls).map(|_| y()).collect())
            }
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.name(), self.signature())
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Uninhabited => f.write_str("uninhabited (no argument can exist)"),
            Evaluation::Unit => f.write_str("()"),
            Evaluation::Constant(value) => write!(f, "{value}"),
            Evaluation::Calls(values) => {
                let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Declaration, Evaluation};

    #[test]
    fn all_declarations_are_listed_once() {
        let names: Vec<_> = Declaration::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["absurd", "unit", "x", "y"]);
    }

    #[test]
    fn from_name_round_trips() {
        for decl in Declaration::ALL {
            assert_eq!(Declaration::from_name(decl.name()), Some(decl));
        }
        assert_eq!(Declaration::from_name("z"), None);
    }

    #[test]
    fn evaluations() {
        assert_eq!(Declaration::Absurd.evaluate(3), Evaluation::Uninhabited);
        assert_eq!(Declaration::Unit.evaluate(3), Evaluation::Unit);
        assert_eq!(Declaration::X.evaluate(3), Evaluation::Constant(42));
        assert_eq!(
            Declaration::Y.evaluate(3),
            Evaluation::Calls(vec![42, 42, 42])
        );
        assert_eq!(Declaration::Y.evaluate(0), Evaluation::Calls(Vec::new()));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Declaration::Absurd.to_string(), "absurd :: Void -> a");
        assert_eq!(Declaration::Y.to_string(), "y :: () -> Int");
        assert_eq!(Evaluation::Calls(vec![42, 42]).to_string(), "[42, 42]");
        assert_eq!(Evaluation::Unit.to_string(), "()");
    }

    #[test]
    fn evaluation_serializes_tagged() {
        let json = serde_json::to_value(Evaluation::Calls(vec![42])).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "calls", "value": [42]}));

        let json = serde_json::to_value(Evaluation::Uninhabited).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "uninhabited"}));

        let json = serde_json::to_value(Declaration::Absurd).unwrap();
        assert_eq!(json, serde_json::json!("absurd"));
    }

    #[test]
    fn oversized_call_count_is_capped() {
        let Evaluation::Calls(values) = Declaration::Y.evaluate(usize::MAX) else {
            panic!("y evaluates to calls");
        };
        assert_eq!(values.len(), Declaration::MAX_CALLS);
        assert!(values.iter().all(|&v| v == 42));
    }
}
