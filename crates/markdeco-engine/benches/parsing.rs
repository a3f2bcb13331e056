use criterion::{Criterion, criterion_group, criterion_main};
use markdeco_engine::{BlockText, ParseOptions, Parser, highlight, lex};
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = pulldown_cmark::Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let options = ParseOptions::default();
    let content = common::generate_markdown_content(100);
    group.bench_function("lex", |b| {
        b.iter(|| std::hint::black_box(lex(std::hint::black_box(&content), &options)));
    });

    let tokens = lex(&content, &options);
    group.bench_function("resolve", |b| {
        let parser = Parser::new(0);
        b.iter(|| std::hint::black_box(parser.parse(std::hint::black_box(&tokens))));
    });

    let nested = common::generate_nested_containers(12);
    group.bench_function("nested_containers", |b| {
        b.iter(|| {
            let tokens = lex(std::hint::black_box(&nested), &options);
            std::hint::black_box(Parser::new(0).parse(&tokens));
        });
    });

    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    group.sample_size(10);

    let options = ParseOptions::default();
    let blocks = BlockText::per_line(&common::generate_line_blocks(1000), &options);
    group.bench_function("per_line_1000", |b| {
        b.iter(|| std::hint::black_box(highlight(std::hint::black_box(&blocks), &options)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pulldown_cmark_baseline,
    bench_pipeline,
    bench_highlight
);
criterion_main!(benches);
