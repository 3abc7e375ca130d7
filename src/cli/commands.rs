//! Command implementations for the pinyin-fts CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::analysis::classifier::is_phonetic_eligible;
use crate::analysis::phonetic::{PhoneticAnalyzer, PinyinAnalyzer};
use crate::analysis::script::segment;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::CompilerConfig;
use crate::error::Result;
use crate::query::{ClauseCompiler, MatchPredicate};

/// Execute a CLI command.
pub fn execute_command(args: PinyinFtsArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Compile(compile_args) => compile_query(compile_args, config, &args),
        Command::Segment(segment_args) => segment_token(segment_args, &args),
        Command::Analyze(analyze_args) => analyze_text(analyze_args, config, &args),
        Command::Batch(batch_args) => run_batch(batch_args, config, &args),
    }
}

fn load_config(args: &PinyinFtsArgs) -> Result<CompilerConfig> {
    match &args.config {
        Some(path) => CompilerConfig::load_from_file(path),
        None => Ok(CompilerConfig::default()),
    }
}

fn build_compiler(config: CompilerConfig, literal: bool) -> Result<ClauseCompiler> {
    if literal {
        ClauseCompiler::literal_only(config)
    } else {
        ClauseCompiler::with_config(config)
    }
}

/// Compile a single query.
fn compile_query(args: &CompileArgs, config: CompilerConfig, cli_args: &PinyinFtsArgs) -> Result<()> {
    let query = args.query.join(" ");
    let compiler = build_compiler(config, args.literal)?;
    let clause = compiler.compile_clause(&query);

    let predicate = if args.columns.is_empty() {
        None
    } else {
        MatchPredicate::new(args.columns.iter().cloned())?.render(&clause)
    };

    output_result(
        "Compiled query",
        &CompileResult {
            clause: clause.to_string(),
            tokens: clause.clauses().to_vec(),
            query,
            predicate,
        },
        cli_args,
    )
}

/// Show the script runs of a token.
fn segment_token(args: &SegmentArgs, cli_args: &PinyinFtsArgs) -> Result<()> {
    output_result(
        "Script runs",
        &SegmentResult {
            token: args.token.clone(),
            runs: segment(&args.token),
        },
        cli_args,
    )
}

/// Show pinyin readings of Latin text.
fn analyze_text(args: &AnalyzeArgs, config: CompilerConfig, cli_args: &PinyinFtsArgs) -> Result<()> {
    let analyzer = PinyinAnalyzer::new().with_max_candidates(config.max_candidates);
    output_result(
        "Phonetic readings",
        &AnalyzeResult {
            text: args.text.clone(),
            analyzer: analyzer.name().to_string(),
            eligible: is_phonetic_eligible(&args.text),
            readings: analyzer.decompose(&args.text),
            initials: analyzer.initials(&args.text),
        },
        cli_args,
    )
}

/// Read non-blank lines as (1-based line number, query).
fn read_queries(input: &Path) -> Result<Vec<(usize, String)>> {
    let reader: Box<dyn BufRead> = if input == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    let mut queries = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let query = line.trim_end_matches('\r');
        if query.trim().is_empty() {
            continue;
        }
        queries.push((line_num + 1, query.to_string()));
    }
    Ok(queries)
}

/// Compile every line of a file.
pub fn compile_batch(
    compiler: &ClauseCompiler,
    queries: Vec<(usize, String)>,
    parallel: bool,
) -> Vec<BatchEntry> {
    let compile = |(line, query): (usize, String)| BatchEntry {
        line,
        clause: compiler.compile(&query),
        query,
    };
    if parallel {
        queries.into_par_iter().map(compile).collect()
    } else {
        queries.into_iter().map(compile).collect()
    }
}

fn run_batch(args: &BatchArgs, config: CompilerConfig, cli_args: &PinyinFtsArgs) -> Result<()> {
    let queries = read_queries(&args.input)?;
    let compiler = build_compiler(config, args.literal)?;

    let start_time = Instant::now();
    let total = queries.len();
    let entries = compile_batch(&compiler, queries, args.parallel);
    let duration = start_time.elapsed();
    info!("Compiled {total} queries in {duration:?}");

    output_result(
        "Batch compiled",
        &BatchResult {
            entries,
            duration_ms: duration.as_millis() as u64,
            queries_per_second: if duration.as_secs_f64() > 0.0 {
                total as f64 / duration.as_secs_f64()
            } else {
                0.0
            },
        },
        cli_args,
    )
}
