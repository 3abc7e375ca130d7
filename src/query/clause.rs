//! Compiled match clauses.
//!
//! Builders return fragment lists rather than finished strings. A [`TokenClause`]
//! keeps its disjuncts separately until it is rendered, and a [`MatchClause`] keeps
//! one entry per token until it is joined with `AND`.

use std::fmt;

use serde::Serialize;

/// Clause for a single token after segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TokenClause {
    /// Phonetic alternatives plus the quoted literal spelling as fallback.
    Phonetic {
        token: String,
        alternatives: Vec<String>,
        literal: String,
    },
    /// A single quoted phrase.
    Literal { token: String, phrase: String },
}

impl TokenClause {
    /// The token this clause was built from.
    pub fn token(&self) -> &str {
        match self {
            TokenClause::Phonetic { token, .. } | TokenClause::Literal { token, .. } => token,
        }
    }

    pub fn is_phonetic(&self) -> bool {
        matches!(self, TokenClause::Phonetic { .. })
    }

    /// The OR-joined disjuncts, in render order.
    pub fn disjuncts(&self) -> Vec<&str> {
        match self {
            TokenClause::Phonetic {
                alternatives,
                literal,
                ..
            } => alternatives
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(literal.as_str()))
                .collect(),
            TokenClause::Literal { phrase, .. } => vec![phrase.as_str()],
        }
    }
}

impl fmt::Display for TokenClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.disjuncts().join(" OR "))
    }
}

/// Compiled expression for a whole query: the AND of its token clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchClause {
    clauses: Vec<TokenClause>,
}

impl MatchClause {
    pub fn new(clauses: Vec<TokenClause>) -> Self {
        MatchClause { clauses }
    }

    pub fn clauses(&self) -> &[TokenClause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// An empty clause means no search should be run, not "match everything".
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl fmt::Display for MatchClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}
