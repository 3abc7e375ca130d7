//! Query clause compilation.
//!
//! Turns one line of mixed-script user input into a boolean full-text match
//! expression for a pinyin-aware FTS5 index.

pub mod clause;
pub mod compiler;
pub mod literal;
pub mod phonetic;
pub mod predicate;

use std::sync::LazyLock;

pub use self::clause::{MatchClause, TokenClause};
pub use self::compiler::ClauseCompiler;
pub use self::predicate::MatchPredicate;

static DEFAULT_COMPILER: LazyLock<ClauseCompiler> = LazyLock::new(ClauseCompiler::new);

/// Compile `query` with the built-in pinyin analyzer and default configuration.
///
/// ```
/// assert_eq!(pinyin_fts::query::compile("中文"), "(\"中文\")");
/// ```
pub fn compile(query: &str) -> String {
    DEFAULT_COMPILER.compile(query)
}
