use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use propsync::catalog::{parse_keys, parse_translations, reconcile};
use propsync::{run_sync, SyncConfig, VectorFormatter, VectorTable};
use std::fs;
use tempfile::TempDir;

/// Canonical catalog with a comment every 20 keys
fn canonical_text(keys: usize) -> String {
    let mut text = String::new();
    for i in 0..keys {
        if i % 20 == 0 {
            text.push_str(&format!("# section {}\n", i / 20));
        }
        text.push_str(&format!("key{} = Base value number {}\n", i, i));
    }
    text
}

/// Target with roughly three quarters of the keys translated, in reverse order
fn target_text(keys: usize) -> String {
    let mut text = String::new();
    for i in (0..keys).rev().filter(|i| i % 4 != 0) {
        text.push_str(&format!("key{} = Übersetzung {}\n", i, i));
    }
    text
}

/// Benchmark parsing + reconciling in memory
fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for size in [100, 1_000, 10_000] {
        let canonical = canonical_text(size);
        let target = target_text(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let catalog = parse_keys(black_box(&canonical));
                let translations = parse_translations(black_box(&target));
                reconcile(&catalog, &translations).render()
            });
        });
    }

    group.finish();
}

/// Benchmark a dry run over a small domain × language matrix on disk
fn bench_dry_run(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let domains = ["circuit", "gui", "menu", "std"];
    let languages = ["de", "es", "fr", "ja"];

    for domain in domains {
        let domain_dir = dir.path().join(domain);
        fs::create_dir_all(&domain_dir).unwrap();
        fs::write(
            domain_dir.join(format!("{}.properties", domain)),
            canonical_text(500),
        )
        .unwrap();
        for lang in languages {
            fs::write(
                domain_dir.join(format!("{}_{}.properties", domain, lang)),
                target_text(500),
            )
            .unwrap();
        }
    }

    let config = SyncConfig::new(dir.path())
        .with_domains(domains)
        .with_languages(languages);

    c.bench_function("dry_run_4x4", |b| {
        b.iter(|| run_sync(black_box(&config)).unwrap());
    });
}

fn bench_vector_table(c: &mut Criterion) {
    let table = VectorTable::builtin().unwrap();
    let formatter = VectorFormatter::new();

    c.bench_function("format_vector_table", |b| {
        b.iter(|| formatter.format(black_box(&table)));
    });
}

criterion_group!(benches, bench_reconcile, bench_dry_run, bench_vector_table);
criterion_main!(benches);
