//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::phonetic::PhoneticGroup;
use crate::analysis::script::ScriptRun;
use crate::cli::args::{OutputFormat, PinyinFtsArgs};
use crate::error::Result;
use crate::query::TokenClause;

/// Results that know how to print themselves for a human reader.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Result structure for a compiled query.
#[derive(Debug, Serialize)]
pub struct CompileResult {
    pub query: String,
    pub clause: String,
    pub tokens: Vec<TokenClause>,
    pub predicate: Option<String>,
}

/// Result structure for segmentation.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub token: String,
    /// `None` when the token cannot be split.
    pub runs: Option<Vec<ScriptRun>>,
}

/// Result structure for phonetic analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResult {
    pub text: String,
    pub analyzer: String,
    pub eligible: bool,
    pub readings: Vec<PhoneticGroup>,
    pub initials: String,
}

/// One compiled line of a batch.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub line: usize,
    pub query: String,
    pub clause: String,
}

/// Result structure for batch compilation.
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub duration_ms: u64,
    pub queries_per_second: f64,
}

/// Replace control characters (such as the boundary sentinel) with `\u{..}` escapes.
pub fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_unicode());
        } else {
            out.push(c);
        }
    }
    out
}

impl HumanOutput for CompileResult {
    fn print_human(&self) {
        if self.clause.is_empty() {
            println!("(empty query, nothing to search)");
            return;
        }
        println!("{}", printable(&self.clause));
        if let Some(predicate) = &self.predicate {
            println!();
            println!("{}", printable(predicate));
        }
    }
}

impl HumanOutput for SegmentResult {
    fn print_human(&self) {
        match &self.runs {
            Some(runs) => {
                for run in runs {
                    println!("{:<6} {}", run.class, run.text);
                }
            }
            None => println!("unsplittable: {}", self.token),
        }
    }
}

impl HumanOutput for AnalyzeResult {
    fn print_human(&self) {
        if !self.eligible {
            println!("{} is not pure ASCII letters; no phonetic readings", self.text);
            return;
        }
        if self.readings.is_empty() {
            println!("no readings");
        }
        for (i, reading) in self.readings.iter().enumerate() {
            println!("{:>3}. {}", i + 1, reading);
        }
        if !self.initials.is_empty() {
            println!("initials: {}", self.initials);
        }
    }
}

impl HumanOutput for BatchResult {
    fn print_human(&self) {
        for entry in &self.entries {
            println!("{}\t{}", entry.line, printable(&entry.clause));
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &PinyinFtsArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PinyinFtsArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_escapes_sentinel() {
        assert_eq!(printable("\"li\u{3}\"+si"), "\"li\\u{3}\"+si");
        assert_eq!(printable("中文"), "中文");
    }

    #[test]
    fn test_compile_result_json() {
        let result = CompileResult {
            query: "中文".to_string(),
            clause: "(\"中文\")".to_string(),
            tokens: vec![crate::query::literal::build_literal_clause("中文")],
            predicate: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["tokens"][0]["kind"], "literal");
        assert_eq!(value["tokens"][0]["phrase"], "\"中文\"");
    }
}
