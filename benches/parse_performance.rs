//! Parse Performance Benchmarks
//!
//! Measures typed and untyped enumeration parsing, including the rejection
//! path that builds the full list of valid values, and registry lookups.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use provisioning_attrs::attrs::names;
use provisioning_attrs::enums::{self, AccountStatus, PrefReplyIncludeOriginalText, StringEnum};
use provisioning_attrs::AttributeRegistry;

fn bench_typed_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_parse");

    group.bench_function("account_status_first", |b| {
        b.iter(|| AccountStatus::parse(black_box("active")))
    });
    group.bench_function("account_status_last", |b| {
        b.iter(|| AccountStatus::parse(black_box("pending")))
    });
    group.bench_function("reply_include_last_of_11", |b| {
        b.iter(|| PrefReplyIncludeOriginalText::parse(black_box("includeBodyAndHeadersWithPrefix")))
    });
    group.bench_function("account_status_rejected", |b| {
        b.iter(|| AccountStatus::parse(black_box("banned")))
    });

    group.finish();
}

fn bench_untyped_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("untyped_parse");

    for definition in enums::all().iter().filter(|d| d.len() >= 5) {
        let inputs: Vec<&str> = definition.wire_values().collect();
        group.throughput(Throughput::Elements(inputs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("all_variants", definition.type_name),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    for input in inputs {
                        let _ = black_box(definition.parse(input));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let registry = AttributeRegistry::global();
    let mut group = c.benchmark_group("registry");

    group.bench_function("load_embedded_catalog", |b| {
        b.iter(AttributeRegistry::with_embedded_catalog)
    });
    group.bench_function("validate_enum_value", |b| {
        b.iter(|| registry.validate_value(black_box(names::ZIMBRA_MAIL_MODE), black_box("mixed")))
    });
    group.bench_function("validate_free_value", |b| {
        b.iter(|| {
            registry.validate_value(black_box(names::ZIMBRA_MAIL_HOST), black_box("mail.example.com"))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_typed_parse, bench_untyped_parse, bench_registry);
criterion_main!(benches);
