//! Criterion benchmarks for the Prosemeter readability pipeline.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use prosemeter::analysis::analyzer::TextAnalyzer;
use prosemeter::analysis::deep::DeepAnalyzer;
use prosemeter::analysis::syllable::SyllableEstimator;

/// Generate a passage of simple repeating sentences for benchmarking.
fn generate_passage(sentences: usize) -> String {
    let templates = [
        "The quick brown fox jumps over the lazy dog.",
        "Quantitative readability estimation necessitates careful tokenization.",
        "Short words read easily.",
        "Institutional bureaucracies systematically accumulate unnecessary complexity!",
        "Was that entirely comprehensible?",
    ];

    let mut passage = String::new();
    for i in 0..sentences {
        passage.push_str(templates[i % templates.len()]);
        passage.push(' ');
    }
    passage
}

fn bench_syllable_estimation(c: &mut Criterion) {
    let estimator = SyllableEstimator::new().unwrap();
    let words = [
        "cat",
        "little",
        "hoped",
        "beautiful",
        "estimation",
        "incomprehensibility",
    ];

    c.bench_function("syllable_estimation", |b| {
        b.iter(|| {
            for word in &words {
                black_box(estimator.estimate(black_box(word)).unwrap());
            }
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = TextAnalyzer::new().unwrap();
    let mut group = c.benchmark_group("analyze");

    for &count in &[10usize, 100, 1000] {
        let passage = generate_passage(count);
        group.throughput(Throughput::Bytes(passage.len() as u64));
        group.bench_function(format!("sentences_{count}"), |b| {
            b.iter(|| black_box(analyzer.analyze(black_box(&passage)).unwrap()))
        });
    }
    group.finish();
}

fn bench_deep_analyze(c: &mut Criterion) {
    let analyzer = DeepAnalyzer::new().unwrap();
    let passage = generate_passage(100);

    c.bench_function("deep_analyze_100_sentences", |b| {
        b.iter(|| black_box(analyzer.deep_analyze(black_box(&passage)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_syllable_estimation,
    bench_analyze,
    bench_deep_analyze
);
criterion_main!(benches);
