//! Benchmarks for chatstats parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- lexical`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::analysis::{LexicalAnalyzer, Stopwords, TemporalStats, UnicodeEmojiFilter};
use chatstats::config::AnalysisConfig;
use chatstats::core::output::{to_csv, to_json, to_text};
use chatstats::core::ChatReport;
use chatstats::parser::TranscriptParser;

use chrono::{NaiveDate, TimeDelta};

// =============================================================================
// Test Data Generators
// =============================================================================

const BODIES: &[&str] = &[
    "ciao come stai?",
    "tutto bene grazie, e tu? 😂",
    "stasera pizza con gli amici",
    "il treno è in ritardo di venti minuti",
    "👍🏽",
    "ok",
];

fn generate_transcript(count: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let senders = ["Alice", "Bob", "Carol"];
    let mut lines = Vec::with_capacity(count + count / 5);
    for i in 0..count {
        let ts = base + TimeDelta::minutes((i as i64 * 37) % 10_000 + i as i64);
        lines.push(format!(
            "{} - {}: {}",
            ts.format("%d/%m/%y, %H:%M"),
            senders[(i * 7 / 3) % senders.len()],
            BODIES[i % BODIES.len()]
        ));
        if i % 5 == 0 {
            lines.push("continua sulla riga dopo".to_string());
        }
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let transcript = parser.parse_str(black_box(txt)).unwrap();
                black_box(transcript)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Engine Benchmarks
// =============================================================================

fn bench_temporal(c: &mut Criterion) {
    let mut group = c.benchmark_group("temporal");
    let config = AnalysisConfig::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let transcript = TranscriptParser::new()
            .parse_str(&generate_transcript(size))
            .unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &transcript,
            |b, transcript| {
                b.iter(|| black_box(TemporalStats::compute(black_box(transcript), &config)));
            },
        );
    }
    group.finish();
}

fn bench_lexical(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexical");
    let analyzer = LexicalAnalyzer::new(Stopwords::italian(), UnicodeEmojiFilter);

    for size in [1_000_usize, 10_000, 50_000] {
        let transcript = TranscriptParser::new()
            .parse_str(&generate_transcript(size))
            .unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &transcript,
            |b, transcript| {
                b.iter(|| black_box(analyzer.analyze(black_box(transcript))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let transcript = TranscriptParser::new()
        .parse_str(&generate_transcript(10_000))
        .unwrap();
    let report = ChatReport::analyze(&transcript, &AnalysisConfig::default());

    group.bench_function("text", |b| b.iter(|| black_box(to_text(black_box(&report)))));
    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(black_box(&report)).unwrap()));
    });
    group.bench_function("csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&report)).unwrap()));
    });
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = AnalysisConfig::default();

    for size in [1_000_usize, 10_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let transcript = TranscriptParser::new().parse_str(black_box(txt)).unwrap();
                let report = ChatReport::analyze(&transcript, &config);
                black_box(to_json(&report).unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parsing,
    bench_temporal,
    bench_lexical,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
