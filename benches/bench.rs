//! Criterion benchmarks for pinyin-fts.
//!
//! Covers the pieces on the per-keystroke path:
//! - Script segmentation
//! - Pinyin decomposition
//! - Full clause compilation

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use pinyin_fts::analysis::phonetic::{PhoneticAnalyzer, PinyinAnalyzer};
use pinyin_fts::analysis::script::segment;
use pinyin_fts::query::ClauseCompiler;

fn sample_queries() -> Vec<&'static str> {
    vec![
        "zhangsan",
        "zhang san",
        "lisi 李四",
        "zhoujielun",
        "xianggangzhongwen",
        "ABC中文DEF",
        "13825638962",
        "珠海@中国",
        "chenyixun wangwu",
        "I love China! 我爱中国!",
    ]
}

fn bench_segmentation(c: &mut Criterion) {
    let tokens = ["ABC中文DEF", "zhoujielun周杰伦", "中華人民共和國", "13825638962"];
    let mut group = c.benchmark_group("segmentation");
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("segment", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(segment(black_box(token)));
            }
        })
    });
    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let analyzer = PinyinAnalyzer::new();
    let mut group = c.benchmark_group("pinyin");
    for text in ["lisi", "xian", "xianggangzhongwen", "anananananan"] {
        group.bench_function(format!("decompose_{text}"), |b| {
            b.iter(|| black_box(analyzer.decompose(black_box(text))))
        });
    }
    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let compiler = ClauseCompiler::new();
    let queries = sample_queries();
    let mut group = c.benchmark_group("compile");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("sample_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(compiler.compile(black_box(query)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_decompose, bench_compile);
criterion_main!(benches);
