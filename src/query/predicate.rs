//! Multi-column `MATCH` predicates.
//!
//! Renders `(name MATCH ('...')) OR (alias MATCH ('...'))` so one compiled clause
//! searches several FTS5 columns at once. The clause is embedded in a single-quoted
//! SQL literal; literal phrases already carry doubled single quotes for that.

use crate::error::{PinyinFtsError, Result};
use crate::query::clause::MatchClause;

/// A set of FTS5 columns searched with the same clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPredicate {
    columns: Vec<String>,
}

impl MatchPredicate {
    /// Columns must be non-empty identifiers of ASCII letters, digits or `_`.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(PinyinFtsError::query("at least one column is required"));
        }
        for column in &columns {
            let valid = !column.is_empty()
                && column
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_');
            if !valid {
                return Err(PinyinFtsError::invalid_argument(format!(
                    "invalid column name {column:?}"
                )));
            }
        }
        Ok(MatchPredicate { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Render the predicate, or `None` when the clause is empty and no search
    /// should be run.
    pub fn render(&self, clause: &MatchClause) -> Option<String> {
        if clause.is_empty() {
            return None;
        }
        let expression = clause.to_string();
        Some(
            self.columns
                .iter()
                .map(|column| format!("({column} MATCH ('{expression}'))"))
                .collect::<Vec<_>>()
                .join(" OR "),
        )
    }
}
