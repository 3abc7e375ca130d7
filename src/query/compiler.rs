//! Clause compiler: raw query line in, match expression out.
//!
//! ```text
//! "ABC中文DEF 138"
//!   split on ' '      -> ["ABC中文DEF", "138"]
//!   segment           -> ["ABC", "中文", "DEF", "138"]
//!   route + build     -> phonetic, literal, phonetic, literal
//!   join with AND     -> (...) AND ("中文") AND (...) AND ("138")
//! ```
//!
//! # Examples
//!
//! ```
//! use pinyin_fts::query::compiler::ClauseCompiler;
//!
//! let compiler = ClauseCompiler::new();
//! assert_eq!(compiler.compile("13825638962"), "(\"13825638962\")");
//! assert_eq!(compiler.compile("   "), "");
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::classifier::{TokenRoute, route};
use crate::analysis::phonetic::{
    AmbiguitySet, NoopPhoneticAnalyzer, PhoneticAnalyzer, PinyinAnalyzer,
};
use crate::analysis::script::segment;
use crate::config::CompilerConfig;
use crate::error::Result;
use crate::query::clause::{MatchClause, TokenClause};
use crate::query::literal::build_literal_clause;
use crate::query::phonetic::PhoneticClauseBuilder;

/// Split a raw query on ASCII space and re-segment every piece by script.
///
/// Empty pieces are dropped. Pieces that cannot be segmented are kept whole.
pub fn split_tokens(query: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for piece in query.split(' ').filter(|piece| !piece.is_empty()) {
        match segment(piece) {
            Some(runs) => tokens.extend(runs.into_iter().map(|run| run.text)),
            None => tokens.push(piece.to_string()),
        }
    }
    tokens
}

/// Compiles raw query lines into match clauses.
///
/// Immutable after construction and safe to share between threads.
#[derive(Clone)]
pub struct ClauseCompiler {
    analyzer: Arc<dyn PhoneticAnalyzer>,
    ambiguity: Arc<AmbiguitySet>,
    config: CompilerConfig,
}

impl Default for ClauseCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClauseCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClauseCompiler")
            .field("analyzer", &self.analyzer.name())
            .field("ambiguous_syllables", &self.ambiguity.len())
            .field("config", &self.config)
            .finish()
    }
}

impl ClauseCompiler {
    /// Compiler with the built-in pinyin analyzer and default configuration.
    pub fn new() -> Self {
        let config = CompilerConfig::default();
        let analyzer = PinyinAnalyzer::new().with_max_candidates(config.max_candidates);
        Self::from_parts(Arc::new(analyzer), config)
    }

    /// Compiler with the built-in pinyin analyzer. Fails if `config` does not validate.
    pub fn with_config(config: CompilerConfig) -> Result<Self> {
        let analyzer = PinyinAnalyzer::new().with_max_candidates(config.max_candidates);
        Self::with_analyzer(Arc::new(analyzer), config)
    }

    /// Compiler that never expands phonetically: every token becomes a literal phrase.
    pub fn literal_only(config: CompilerConfig) -> Result<Self> {
        Self::with_analyzer(Arc::new(NoopPhoneticAnalyzer::new()), config)
    }

    pub fn with_analyzer(
        analyzer: Arc<dyn PhoneticAnalyzer>,
        config: CompilerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(analyzer, config))
    }

    fn from_parts(analyzer: Arc<dyn PhoneticAnalyzer>, config: CompilerConfig) -> Self {
        let ambiguity = config.ambiguity_set();
        ClauseCompiler {
            analyzer,
            ambiguity,
            config,
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &dyn PhoneticAnalyzer {
        self.analyzer.as_ref()
    }

    /// Build the clause for one already-segmented token.
    pub fn compile_token(&self, token: &str) -> TokenClause {
        match route(token) {
            TokenRoute::Phonetic => {
                PhoneticClauseBuilder::new(self.analyzer.as_ref(), &self.ambiguity, &self.config)
                    .build(token)
            }
            TokenRoute::Literal => {
                debug!("Token: {token}, literal");
                build_literal_clause(token)
            }
        }
    }

    /// Compile a query into its structured form.
    pub fn compile_clause(&self, query: &str) -> MatchClause {
        MatchClause::new(
            split_tokens(query)
                .iter()
                .map(|token| self.compile_token(token))
                .collect(),
        )
    }

    /// Compile a query into a match expression. Empty input gives an empty string.
    pub fn compile(&self, query: &str) -> String {
        self.compile_clause(query).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens("zhang  san"), vec!["zhang", "san"]);
        assert_eq!(split_tokens("ABC中文DEF"), vec!["ABC", "中文", "DEF"]);
        assert_eq!(split_tokens("珠海@中国 li"), vec!["珠海@中国", "li"]);
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("    ").is_empty());
    }

    #[test]
    fn test_tabs_are_not_separators() {
        assert_eq!(split_tokens("a\tb"), vec!["a\tb"]);
    }

    #[test]
    fn test_compile_two_tokens() {
        let compiler = ClauseCompiler::new();
        assert_eq!(
            compiler.compile("zhang san"),
            "(zhang OR \"zhang\") AND (san OR \"san\")"
        );
    }

    #[test]
    fn test_compile_mixed_script() {
        let compiler = ClauseCompiler::new();
        let clause = compiler.compile_clause("ABC中文DEF");
        assert_eq!(clause.len(), 3);
        assert!(clause.clauses()[0].is_phonetic());
        assert!(!clause.clauses()[1].is_phonetic());
        assert!(clause.clauses()[2].is_phonetic());
        assert_eq!(clause.clauses()[1].to_string(), "(\"中文\")");
    }

    #[test]
    fn test_compile_literal_only() {
        let compiler = ClauseCompiler::literal_only(CompilerConfig::default()).unwrap();
        assert_eq!(compiler.compile("lisi 李四"), "(\"lisi\") AND (\"李四\")");
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = CompilerConfig {
            syllable_joiner: "\"".to_string(),
            ..Default::default()
        };
        assert!(ClauseCompiler::with_config(config.clone()).is_err());
        assert!(ClauseCompiler::literal_only(config.clone()).is_err());
        assert!(
            ClauseCompiler::with_analyzer(Arc::new(NoopPhoneticAnalyzer::new()), config).is_err()
        );

        let config = CompilerConfig {
            boundary_sentinel: '\'',
            ..Default::default()
        };
        assert!(ClauseCompiler::with_config(config).is_err());
    }

    #[test]
    fn test_default_compiler_balances_quotes() {
        let compiled = ClauseCompiler::new().compile("zhangsan lisi");
        assert_eq!(compiled.matches('"').count() % 2, 0);
    }

    #[test]
    fn test_compile_empty() {
        let compiler = ClauseCompiler::new();
        assert_eq!(compiler.compile(""), "");
        assert_eq!(compiler.compile("   "), "");
        assert!(compiler.compile_clause(" ").is_empty());
    }

    #[test]
    fn test_compiler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClauseCompiler>();
    }
}
