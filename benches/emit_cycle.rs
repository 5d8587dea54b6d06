use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fibcycle::{Emitter, EmitterConfigBuilder};
use std::io;

fn outer_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_cycle");
    for threshold in [255, 65_536, 1_000_000_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("emit_cycle", threshold),
            threshold,
            |b, t| {
                let config = EmitterConfigBuilder::default()
                    .threshold(*t)
                    .build()
                    .unwrap();
                let mut emitter = Emitter::new(io::sink(), config).unwrap();
                b.iter(|| emitter.emit_cycle().unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, outer_bench);
criterion_main!(benches);
