//! Rendering of declaration evaluations.

use serde::Serialize;
use typelore_types::{Declaration, Evaluation};

#[derive(Debug, Serialize)]
pub struct Entry {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
    pub evaluation: Evaluation,
}

impl Entry {
    fn new(decl: Declaration, y_calls: usize) -> Self {
        let evaluation = decl.evaluate(y_calls);
        tracing::debug!(declaration = decl.name(), %evaluation, "Evaluated");
        Self {
            name: decl.name(),
            signature: decl.signature(),
            description: decl.description(),
            evaluation,
        }
    }
}

#[must_use]
pub fn collect(declarations: &[Declaration], y_calls: usize) -> Vec<Entry> {
    declarations
        .iter()
        .map(|&decl| Entry::new(decl, y_calls))
        .collect()
}

#[must_use]
pub fn render_text(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{} :: {}\n", entry.name, entry.signature));
        out.push_str(&format!("  -- {}\n", entry.description));
        out.push_str(&format!("  = {}\n", entry.evaluation));
    }
    out
}

pub fn render_json(entries: &[Entry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
