//! Classifier micro-benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docstruct::classify::{detect_chart_indicator, detect_financial_table, detect_headings};

const SAMPLE_LINES: [&str; 6] = [
    "PERFORMANCE SUMMARY",
    "Annualized return since inception 12.5%",
    "Holdings as of 31 December:",
    "The fund invests primarily in investment-grade corporate bonds",
    "Figure 3 shows cumulative growth",
    "",
];

fn bench_classify(c: &mut Criterion) {
    c.bench_function("detect_financial_table", |b| {
        b.iter(|| {
            for line in SAMPLE_LINES {
                black_box(detect_financial_table(black_box(line)));
            }
        })
    });

    c.bench_function("detect_chart_indicator", |b| {
        b.iter(|| {
            for line in SAMPLE_LINES {
                black_box(detect_chart_indicator(black_box(line)));
            }
        })
    });

    c.bench_function("detect_headings", |b| {
        b.iter(|| {
            for line in SAMPLE_LINES {
                black_box(detect_headings(black_box(line)));
            }
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
