//! Literal phrase clauses.
//!
//! Quote characters are escaped by doubling: `"` becomes `""` (FTS5 phrase syntax)
//! and `'` becomes `''` (so the clause survives being embedded in a single-quoted
//! SQL string literal).

use crate::query::clause::TokenClause;

/// Escape `text` and wrap it in double quotes as one phrase term.
pub fn quote_phrase(text: &str) -> String {
    let mut phrase = String::with_capacity(text.len() + 2);
    phrase.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\'') {
            phrase.push(c);
        }
        phrase.push(c);
    }
    phrase.push('"');
    phrase
}

/// Reverse [`quote_phrase`]. Returns `None` if `phrase` is not a well-formed quoted
/// phrase (missing delimiters or a quote that is not doubled).
pub fn unquote_phrase(phrase: &str) -> Option<String> {
    let inner = phrase.strip_prefix('"')?.strip_suffix('"')?;
    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if matches!(c, '"' | '\'') && chars.next() != Some(c) {
            return None;
        }
        text.push(c);
    }
    Some(text)
}

/// Build the clause for a token that is not phonetically expanded.
pub fn build_literal_clause(token: &str) -> TokenClause {
    TokenClause::Literal {
        token: token.to_string(),
        phrase: quote_phrase(token),
    }
}
