//! Benchmarking constellation line resolution
//! against a full size catalogue name table
extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use starchart::figure::builtin_figures;
use starchart::prelude::{Catalogue, CatalogueKind, Resolver};

fn benchmark(c: &mut Criterion) {
    let catalogue =
        Catalogue::from_file("test_resources/BSC5/bsc5_subset.dat", CatalogueKind::BrightStar)
            .unwrap();

    // replicate the excerpt to the size of BSC5, true names last
    let mut names = (0..9000)
        .map(|i| format!("HR{:04}", i))
        .collect::<Vec<_>>();
    names.extend(catalogue.names().iter().map(|name| name.to_string()));

    let theta = (0..names.len()).map(|i| i as f64).collect::<Vec<_>>();
    let r = theta.clone();
    let figures = builtin_figures();
    let resolver = Resolver::new(&names);

    let mut grp = c.benchmark_group("resolver");

    grp.bench_function("lookup/exact", |b| {
        b.iter(|| resolver.find(black_box("3Alp Lyr")))
    });

    grp.bench_function("lookup/substring", |b| {
        b.iter(|| resolver.find(black_box("Alp Tau")))
    });

    grp.bench_function("figures", |b| {
        b.iter(|| {
            for figure in figures.iter() {
                let _ = figure.resolve(&resolver, &theta, &r).unwrap();
            }
        })
    });

    grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
