use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ntriples_rules::{enhance_all, par_enhance_all, parse_rules, Ruleset, Triple};

const RULES: &str = "@language en-GB
@prefix ui http://mysite.com/ui/
@prefix app http://mysite.com/app/
@default localized ui:i18n/eng/gb/**
@default iri ui:**/*-id
ui:name string
ui:age integer
ui:score float
ui:active boolean
ui:born date
ui:seen datetime
ui:friend iri";

fn sample_triples(size: usize) -> Vec<Triple> {
    let predicates = [
        ("ui:name", "Alice"),
        ("ui:age", "42"),
        ("ui:score", "0.75"),
        ("ui:active", "true"),
        ("ui:born", "1990-04-01"),
        ("ui:seen", "2018-11-18T10:20:30Z"),
        ("ui:friend", "app:people/bob"),
        ("ui:i18n/eng/gb/title", "Colour"),
        ("ui:account/owner-id", "app:people/carol"),
        ("ui:unlisted", "plain"),
    ];

    (0..size)
        .map(|i| {
            let (predicate, object) = predicates[i % predicates.len()];
            Triple::new(format!("app:people/p{}", i), predicate, object)
        })
        .collect()
}

/// Benchmark rules file parsing
fn bench_parse_rules(c: &mut Criterion) {
    c.bench_function("parse_rules", |b| {
        b.iter(|| {
            let rules = parse_rules(RULES);
            criterion::black_box(rules.predicates.len());
        });
    });
}

/// Benchmark sequential vs parallel batch enhancement
fn bench_enhance(c: &mut Criterion) {
    let rules: Ruleset = parse_rules(RULES);
    let mut group = c.benchmark_group("enhance");

    for size in [100, 1000, 10_000].iter() {
        let triples = sample_triples(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| criterion::black_box(enhance_all(&rules, &triples).len()));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| criterion::black_box(par_enhance_all(&rules, &triples).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_rules, bench_enhance);
criterion_main!(benches);
