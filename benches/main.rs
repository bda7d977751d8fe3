// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

use criterion::{criterion_group, criterion_main, Criterion};
use zacros_rs::prelude::*;

fn benchmark(c: &mut Criterion) {
    let sites = ["f", "h", "f", "h", "f", "h"];
    let neighboring: Vec<(usize, usize)> = (1..sites.len()).map(|i| (i, i + 1)).collect();
    let species: Vec<Species> = ["CO*", "O*", "*", "CO*", "O*", "*"]
        .iter()
        .map(|s| Species::new(s).unwrap().with_denticity(1))
        .collect();

    let cluster = Cluster::new(&sites, &neighboring, species.clone())
        .unwrap()
        .with_multiplicity(2)
        .with_cluster_energy(-0.35);

    c.bench_function("Formula::parse", |b| {
        b.iter(|| std::hint::black_box(Formula::parse("Ca3(P(O2)2)2").unwrap()))
    });

    c.bench_function("Species::new", |b| {
        b.iter(|| std::hint::black_box(Species::new("CH3CH2OH*").unwrap()))
    });

    c.bench_function("Cluster::new", |b| {
        b.iter(|| {
            std::hint::black_box(
                Cluster::new(&sites, &neighboring, species.clone()).unwrap(),
            )
        })
    });

    c.bench_function("Cluster::to_string", |b| {
        b.iter(|| std::hint::black_box(cluster.to_string()))
    });

    let expansion: ClusterExpansion = (0..100)
        .map(|i| cluster.clone().with_multiplicity(i))
        .collect();

    c.bench_function("ClusterExpansion::to_string (100 clusters)", |b| {
        b.iter(|| std::hint::black_box(expansion.to_string()))
    });

    let model = LangmuirHinshelwood::new(1.0, 1.25, 1.0).unwrap();

    c.bench_function("LangmuirHinshelwood::max_tof_fraction", |b| {
        b.iter(|| std::hint::black_box(model.max_tof_fraction()))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
