use std::sync::OnceLock;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use transduce::{Stages, Transform, fold_values, identity, save_entries, transduce, transduce_with};

const NUM_INTS: usize = 100_000;

fn vals() -> &'static [u64] {
    static VALS: OnceLock<Vec<u64>> = OnceLock::new();
    VALS.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(5938450);
        (0..NUM_INTS)
            .map(|_| rand::Rng::gen_range(&mut rng, 0..1_000_000))
            .collect()
    })
}

fn benchmark_filter_map_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_map_save");

    group.bench_function("iter", |b| {
        b.iter(|| {
            let out: Vec<_> = vals()
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, value)| value % 2 == 0)
                .map(|(index, value)| (index, value * 3))
                .collect();
            black_box(out)
        })
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let transformation = identity()
                .filter(|(_, value): &(usize, u64)| value % 2 == 0)
                .map(|(index, value)| (index, value * 3));
            black_box(transduce_with(vals(), save_entries(), transformation).unwrap())
        })
    });

    group.bench_function("stages", |b| {
        b.iter(|| {
            let stages = Stages::new()
                .filter(|(_, value): &(usize, u64)| value % 2 == 0)
                .map(|(index, value)| (index, value * 3));
            black_box(transduce_with(vals(), save_entries(), stages).unwrap())
        })
    });

    group.finish();
}

fn benchmark_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    group.bench_function("iter", |b| {
        b.iter(|| black_box(vals().iter().fold(0_u64, |acc, value| acc.wrapping_add(*value))))
    });

    group.bench_function("fold_values", |b| {
        b.iter(|| {
            let reducing = fold_values(|acc: u64, value: u64| acc.wrapping_add(value), 0);
            black_box(transduce(vals(), reducing).unwrap())
        })
    });

    group.finish();
}

criterion_group!(pipeline, benchmark_filter_map_save, benchmark_fold);
criterion_main!(pipeline);
