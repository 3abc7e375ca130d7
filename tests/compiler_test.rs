//! Integration tests for query clause compilation.

use std::sync::Arc;
use std::thread;

use pinyin_fts::analysis::phonetic::{NoopPhoneticAnalyzer, PhoneticAnalyzer, PhoneticGroup};
use pinyin_fts::analysis::script::segment;
use pinyin_fts::prelude::*;
use pinyin_fts::query::compiler::split_tokens;
use pinyin_fts::query::literal::unquote_phrase;

/// Analyzer that answers from a fixed table, for exact expectations.
struct TableAnalyzer;

impl PhoneticAnalyzer for TableAnalyzer {
    fn decompose(&self, text: &str) -> Vec<PhoneticGroup> {
        match text {
            "xian" => vec![
                PhoneticGroup::from(vec!["xian"]),
                PhoneticGroup::from(vec!["xi", "an"]),
            ],
            "lisi" => vec![PhoneticGroup::from(vec!["li", "si"])],
            _ => Vec::new(),
        }
    }

    fn initials(&self, text: &str) -> String {
        match text {
            "lisi" => "ls".to_string(),
            _ => String::new(),
        }
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

fn table_compiler() -> ClauseCompiler {
    ClauseCompiler::with_analyzer(Arc::new(TableAnalyzer), CompilerConfig::default()).unwrap()
}

#[test]
fn test_single_phonetic_token() {
    let compiler = ClauseCompiler::new();
    let clause = compiler.compile_clause("lisi");
    assert_eq!(clause.len(), 1);
    assert_eq!(clause.to_string(), "(\"li\u{3}\"+si OR ls OR \"lisi\")");
}

#[test]
fn test_two_whitespace_tokens() {
    let compiler = table_compiler();
    assert_eq!(
        compiler.compile("lisi xian"),
        "(\"li\u{3}\"+si OR ls OR \"lisi\") AND (xian OR \"xi\u{3}\"+an OR \"xian\")"
    );
}

#[test]
fn test_mixed_script_without_space() {
    let compiler = table_compiler();
    assert_eq!(
        compiler.compile("ABC中文DEF"),
        "(\"ABC\") AND (\"中文\") AND (\"DEF\")"
    );

    let clause = ClauseCompiler::new().compile_clause("ABC中文DEF");
    let tokens: Vec<&str> = clause.clauses().iter().map(|c| c.token()).collect();
    assert_eq!(tokens, vec!["ABC", "中文", "DEF"]);
}

#[test]
fn test_digits_are_literal() {
    let compiler = ClauseCompiler::new();
    assert_eq!(compiler.compile("13825638962"), "(\"13825638962\")");
}

#[test]
fn test_quotes_are_escaped() {
    let compiler = ClauseCompiler::new();
    assert_eq!(
        compiler.compile("he said \"hi\""),
        "(he OR \"he\") AND (\"said\") AND (\"\"\"hi\"\"\")"
    );
    assert_eq!(
        compiler.compile("@English &special _characters.\"''bacon"),
        "(\"@English\") AND (\"&special\") AND (\"_characters.\"\"''''bacon\")"
    );
}

#[test]
fn test_empty_input() {
    let compiler = ClauseCompiler::new();
    assert_eq!(compiler.compile(""), "");
    assert_eq!(compiler.compile("   "), "");
}

#[test]
fn test_idempotence() {
    let compiler = ClauseCompiler::new();
    for query in ["lisi", "zhang san", "ABC中文DEF", "xianggang 香港", "珠海@中国"] {
        assert_eq!(compiler.compile(query), compiler.compile(query));
    }
}

#[test]
fn test_segmentation_is_lossless() {
    for token in ["ABC中文DEF", "zhoujielun周杰伦", "中華人民共和國", "living"] {
        let runs = segment(token).unwrap();
        assert_eq!(runs.iter().map(|r| r.text.as_str()).collect::<String>(), token);
    }
}

#[test]
fn test_veto_routes_whole_token_to_literal() {
    let compiler = ClauseCompiler::new();
    for token in ["珠海@中国", "北京@中國", "li-si", "zhang3"] {
        assert!(segment(token).is_none());
        let clause = compiler.compile_clause(token);
        assert_eq!(clause.len(), 1);
        assert!(!clause.clauses()[0].is_phonetic());
        assert_eq!(clause.clauses()[0].token(), token);
    }
}

#[test]
fn test_literal_escaping_round_trip() {
    let compiler = ClauseCompiler::new();
    for token in ["\"hi\"", "it's", "''a\"\"b", "x\"中"] {
        let clause = compiler.compile_clause(token);
        let disjuncts = clause.clauses()[0].disjuncts();
        assert_eq!(unquote_phrase(disjuncts[0]).as_deref(), Some(token));
    }
}

#[test]
fn test_fallback_literal_is_last_disjunct() {
    let compiler = ClauseCompiler::new();
    for token in ["lisi", "xian", "zhoujielun", "bcd", "Living"] {
        let clause = compiler.compile_clause(token);
        let token_clause = &clause.clauses()[0];
        assert!(token_clause.is_phonetic());
        let disjuncts = token_clause.disjuncts();
        assert_eq!(disjuncts.last().copied(), Some(format!("\"{token}\"").as_str()));
    }
}

#[test]
fn test_conjunction_arity() {
    let compiler = ClauseCompiler::new();
    for query in ["a", "zhang san", "ABC中文DEF 138 x", "  li   si  "] {
        let n = split_tokens(query).len();
        let compiled = compiler.compile(query);
        // sub-clauses contain " OR " but never " AND "
        assert_eq!(compiled.split(" AND ").count(), n);
        assert!(compiled.split(" AND ").all(|c| c.starts_with('(') && c.ends_with(')')));
    }
}

#[test]
fn test_no_stray_double_quotes() {
    let compiler = ClauseCompiler::new();
    for query in ["\"", "a\"b 中\"文", "lisi \"\"\"", "'\"'"] {
        let clause = compiler.compile_clause(query);
        for token_clause in clause.clauses() {
            let disjuncts = token_clause.disjuncts();
            for disjunct in &disjuncts {
                assert_eq!(disjunct.matches('"').count() % 2, 0, "unbalanced {disjunct}");
            }
            let literal = disjuncts.last().copied().unwrap_or_default();
            assert_eq!(unquote_phrase(literal).as_deref(), Some(token_clause.token()));
        }
    }
}

#[test]
fn test_literal_only_compiler() {
    let compiler = ClauseCompiler::with_analyzer(
        Arc::new(NoopPhoneticAnalyzer::new()),
        CompilerConfig::default(),
    )
    .unwrap();
    assert_eq!(compiler.compile("lisi 中文"), "(\"lisi\") AND (\"中文\")");
}

/// Analyzer whose readings are FTS5 operator words.
struct OperatorAnalyzer;

impl PhoneticAnalyzer for OperatorAnalyzer {
    fn decompose(&self, _text: &str) -> Vec<PhoneticGroup> {
        vec![
            PhoneticGroup::from(vec!["OR"]),
            PhoneticGroup::from(vec!["NOT", "x"]),
            PhoneticGroup::from(vec!["ni", "hao"]),
        ]
    }

    fn initials(&self, _text: &str) -> String {
        "NEAR".to_string()
    }

    fn name(&self) -> &'static str {
        "operator"
    }
}

#[test]
fn test_operator_words_never_reach_output() {
    let compiler =
        ClauseCompiler::with_analyzer(Arc::new(OperatorAnalyzer), CompilerConfig::default())
            .unwrap();
    let compiled = compiler.compile("abc def");
    assert_eq!(
        compiled,
        "(\"ni\u{3}\"+hao OR \"abc\") AND (\"ni\u{3}\"+hao OR \"def\")"
    );
    assert!(!compiled.contains("NOT"));
    assert!(!compiled.contains("NEAR"));
}

#[test]
fn test_predicate_over_compiled_clause() {
    let compiler = table_compiler();
    let predicate = MatchPredicate::new(vec!["name", "alias"]).unwrap();

    let rendered = predicate.render(&compiler.compile_clause("李四")).unwrap();
    assert_eq!(
        rendered,
        "(name MATCH ('(\"李四\")')) OR (alias MATCH ('(\"李四\")'))"
    );
    assert_eq!(predicate.render(&compiler.compile_clause("  ")), None);
}

#[test]
fn test_concurrent_compilation() {
    let compiler = Arc::new(ClauseCompiler::new());
    let expected = compiler.compile("zhang san 张三 lisi");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let compiler = Arc::clone(&compiler);
            thread::spawn(move || compiler.compile("zhang san 张三 lisi"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_module_level_compile() {
    assert_eq!(pinyin_fts::query::compile("中文"), "(\"中文\")");
}
