//! # pinyin-fts
//!
//! Compiles one line of mixed Latin/Chinese search input into a boolean FTS5 match
//! expression. Latin words are expanded into their pinyin readings so that typing
//! `zhangsan` finds records indexed as `张三`, while the literal spelling is always
//! kept as a fallback.
//!
//! ```
//! use pinyin_fts::query::ClauseCompiler;
//!
//! let compiler = ClauseCompiler::new();
//! let clause = compiler.compile("zhang 三");
//! assert_eq!(clause, "(zhang OR \"zhang\") AND (\"三\")");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod query;

pub mod prelude {
    pub use crate::analysis::phonetic::{PhoneticAnalyzer, PhoneticGroup};
    pub use crate::config::CompilerConfig;
    pub use crate::error::{PinyinFtsError, Result};
    pub use crate::query::{ClauseCompiler, MatchClause, MatchPredicate, TokenClause};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
