use std::sync::OnceLock;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Map, Value};
use transduce::{Canonical, save_entries, transduce};
use transduce_convert::{Convertor, ToObject, ToSet, ToVec, from_object, to_object};

const NUM_ENTRIES: usize = 10_000;

fn canonical() -> &'static Canonical<String, u32> {
    static CANONICAL: OnceLock<Canonical<String, u32>> = OnceLock::new();
    CANONICAL.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(5938450);
        (0..NUM_ENTRIES)
            .map(|index| {
                let value = rand::Rng::gen_range(&mut rng, 0..1_000);
                (format!("key{}", index), value)
            })
            .collect()
    })
}

fn object() -> &'static Map<String, Value> {
    static OBJECT: OnceLock<Map<String, Value>> = OnceLock::new();
    OBJECT.get_or_init(|| to_object(canonical().clone()))
}

fn benchmark_convertors(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("to_vec", |b| {
        b.iter_batched(
            || canonical().clone(),
            |canonical| black_box(ToVec.convert(canonical)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("to_set", |b| {
        b.iter_batched(
            || canonical().clone(),
            |canonical| black_box(ToSet.convert(canonical)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("to_object", |b| {
        b.iter_batched(
            || canonical().clone(),
            |canonical| black_box(ToObject.convert(canonical)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("from_object", |b| b.iter(|| black_box(from_object(object()))));

    group.bench_function("retransduce", |b| {
        b.iter(|| black_box(transduce(canonical(), save_entries()).unwrap()))
    });

    group.finish();
}

criterion_group!(convert, benchmark_convertors);
criterion_main!(convert);
