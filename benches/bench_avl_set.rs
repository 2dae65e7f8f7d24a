use balanced_set::avl_tree::AvlSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn random_values() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for value in &values {
                set.insert(*value);
            }
        })
    });
}

fn bench_avl_set_insert(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench avl_set insert", move |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for value in &values {
                set.insert(*value);
            }
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let values = random_values();
    let mut set = AvlSet::new();
    for value in &values {
        set.insert(*value);
    }

    c.bench_function("bench avl_set contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_avl_set_remove(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench avl_set remove", move |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for value in &values {
                set.insert(*value);
            }
            for value in &values {
                black_box(set.remove(value));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_avl_set_insert,
    bench_avl_set_contains,
    bench_avl_set_remove,
);
criterion_main!(benches);
