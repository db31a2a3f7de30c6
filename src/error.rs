use thiserror::Error;

use crate::schema::Violation;

#[derive(Debug, Error)]
pub enum Error {
    /// The text is not a JSON node tree. `path` points at the offending value.
    #[error("invalid UI description at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("UI description failed validation:\n{}", render_violations(.0))]
    Invalid(Vec<Violation>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}
