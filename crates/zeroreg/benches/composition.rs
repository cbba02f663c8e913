//! Fragment composition and matching benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use zeroreg::prelude::*;
use zeroreg::{EngineConfig, EngineKind, MatcherCache, patterns};

fn bench_literal_escaping(c: &mut Criterion) {
    let text = "price: $100.00 (approx.) [tax included] a|b";

    c.bench_function("literal_escape", |b| {
        b.iter(|| literal(black_box(text)));
    });
}

fn bench_composition(c: &mut Criterion) {
    c.bench_function("compose_phone", |b| {
        b.iter(|| {
            optional("+")
                .then(digits(black_box(3)))
                .then("-")
                .then(digits(3))
                .then("-")
                .then(digits(4))
        });
    });

    c.bench_function("compose_named_date", |b| {
        b.iter(|| {
            capture_named(digits(4), "year")
                .then("-")
                .then(capture_named(digits(2), "month"))
                .then("-")
                .then(capture_named(digits(2), "day"))
        });
    });
}

fn bench_cached_match(c: &mut Criterion) {
    let phone = digits(3).then("-").then(digits(4));
    let haystack = "Call us at 555-1234 for more information";

    c.bench_function("cached_is_match", |b| {
        b.iter(|| phone.is_match(black_box(haystack)));
    });
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let source = digit().one_or_more().then("px");
    let haystack = "width: 100px; height: 50em";

    for engine in [EngineKind::Basic, EngineKind::Fancy] {
        let config = EngineConfig::new().engine(engine);
        let matcher = Matcher::compile_with(source.as_str(), "", &config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(engine), &matcher, |b, m| {
            b.iter(|| m.find(black_box(haystack)));
        });
    }

    group.finish();
}

fn bench_cache_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_capacity");
    let sources: Vec<String> = (0..32).map(|i| format!(r"\d{{{i}}}")).collect();

    for capacity in &[4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), capacity, |b, &cap| {
            let cache = MatcherCache::with_capacity(cap);
            b.iter(|| {
                for source in &sources {
                    black_box(cache.get_or_compile(source, "").unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_catalogue(c: &mut Criterion) {
    c.bench_function("email_is_match", |b| {
        b.iter(|| patterns::EMAIL.is_match(black_box("user.name+tag@domain.co.uk")));
    });

    c.bench_function("strong_password_is_match", |b| {
        b.iter(|| patterns::STRONG_PASSWORD.is_match(black_box("MyP@ssw0rd")));
    });
}

criterion_group!(
    benches,
    bench_literal_escaping,
    bench_composition,
    bench_cached_match,
    bench_engines,
    bench_cache_sizes,
    bench_catalogue,
);
criterion_main!(benches);
