//! Criterion benchmarks for forward and reverse transliteration throughput.

use bangla_phonetic::{EngineConfig, RuleCorpus, Transliterator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SENTENCES: &[&str] = &[
    "amar sOnar bangla ami tomay bhalobashi",
    "ciroDin tomar akash tomar batash amar prane bajay bashi",
    "O ma fagune tor amer bone ghrane pagol kore",
    "jIbon ekTa nodir moto boye cOle",
];

fn latin_text(chars: usize) -> String {
    let mut text = String::with_capacity(chars + 64);
    while text.len() < chars {
        for sentence in SENTENCES {
            text.push_str(sentence);
            text.push(' ');
        }
    }
    text.truncate(chars);
    text
}

fn bench_avro(c: &mut Criterion) {
    let mut group = c.benchmark_group("avro");
    let cached = Transliterator::new(RuleCorpus::avro());
    let uncached = Transliterator::with_config(
        RuleCorpus::avro(),
        &EngineConfig {
            memo_capacity: 0,
            ..EngineConfig::default()
        },
    );

    for size in [100, 1000, 10_000] {
        let text = latin_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("memo", size), &text, |b, text| {
            b.iter(|| cached.avro(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("no_memo", size), &text, |b, text| {
            b.iter(|| uncached.avro(black_box(text)))
        });
    }

    group.finish();
}

fn bench_orva(c: &mut Criterion) {
    let mut group = c.benchmark_group("orva");
    let engine = Transliterator::new(RuleCorpus::avro());

    for size in [100, 1000, 10_000] {
        let text = engine.avro(&latin_text(size));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| engine.orva(black_box(text)))
        });
    }

    group.finish();
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("compile_bundled_corpus", |b| {
        b.iter(|| Transliterator::new(black_box(RuleCorpus::avro())))
    });
}

criterion_group!(benches, bench_avro, bench_orva, bench_setup);
criterion_main!(benches);
