use std::hint::black_box;
use std::time::Duration;

use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng};
use criterion::measurement::Measurement;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId};

use llrb::{LlrbTree, OrderedSymbolTable, StdBTreeTable};

const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
const OPS_PER_ITER: usize = 200;
const KEY_STRIDE: u64 = 4;
// StdBTreeTable answers rank/select by walking, so the order group stays small.
const ORDER_SIZES: [usize; 2] = [1_000, 4_000];

fn build<M>(keys: &[u64]) -> M
where
    M: OrderedSymbolTable<Key = u64, Value = u64>,
{
    let mut map = M::new();
    for &k in keys {
        map.insert(k, k);
    }
    map
}

pub fn bench_read<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedSymbolTable<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let mut rng = default_rng();
        let keys = bench::shuffled_keys(&mut rng, size, KEY_STRIDE);
        let queries = bench::random_queries(&mut rng, OPS_PER_ITER, size, KEY_STRIDE);
        let map: M = build(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for &q in &queries {
                    black_box(map.get(&q).copied());
                    black_box(map.floor(&q).copied());
                    black_box(map.ceiling(&q).copied());
                }
            })
        });
    }
}

pub fn bench_order<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedSymbolTable<Key = u64, Value = u64>,
{
    for &size in &ORDER_SIZES {
        apply_small_runtime_config(group);
        let mut rng = default_rng();
        let keys = bench::shuffled_keys(&mut rng, size, KEY_STRIDE);
        let queries = bench::random_queries(&mut rng, OPS_PER_ITER, size, KEY_STRIDE);
        let map: M = build(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for &q in &queries {
                    let r = map.rank(&q);
                    black_box(map.select(r).copied());
                }
            })
        });
    }
}

pub fn bench_update<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedSymbolTable<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_medium_runtime_config(group);
        let mut rng = default_rng();
        let keys = bench::shuffled_keys(&mut rng, size, KEY_STRIDE);
        // Odd keys never collide with the stride-aligned initial keys.
        let fresh: Vec<u64> = bench::random_queries(&mut rng, OPS_PER_ITER, size, KEY_STRIDE)
            .into_iter()
            .map(|k| k | 1)
            .collect();

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_batched(
                || build::<M>(&keys),
                |mut map| {
                    for &k in &fresh {
                        black_box(map.insert(k, k));
                    }
                    for &k in &fresh {
                        black_box(map.remove(&k));
                    }
                    map
                },
                BatchSize::LargeInput,
            )
        });
    }
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_read::<StdBTreeTable<u64, u64>, _>(group, "std_btree");
    bench_read::<LlrbTree<u64, u64>, _>(group, "llrb");
}

pub fn bench_all_order<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_order::<StdBTreeTable<u64, u64>, _>(group, "std_btree");
    bench_order::<LlrbTree<u64, u64>, _>(group, "llrb");
}

pub fn bench_all_update<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_update::<StdBTreeTable<u64, u64>, _>(group, "std_btree");
    bench_update::<LlrbTree<u64, u64>, _>(group, "llrb");
}
