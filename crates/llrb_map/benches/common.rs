use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use llrb_map::{LlrbMap, OrderedMap, StdBTreeMap};

const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
const OPS_PER_ITER: usize = 200;
const GET_HIT_RATE_PERCENT: u64 = 80;

pub fn bench_insert<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_medium_runtime_config(group);
        let base_seed = seed_base(1, size as u64);
        let keys = generate_keys(size, base_seed);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let values: Vec<u64> = (0..size).map(|_| rng.random()).collect();
                    let start = Instant::now();
                    let mut map = M::new();
                    for (&k, &v) in keys.iter().zip(&values) {
                        black_box(map.insert(k, v));
                    }
                    black_box(map.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_insert_sorted<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_medium_runtime_config(group);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let start = Instant::now();
                    let mut map = M::new();
                    for k in 0..size as u64 {
                        black_box(map.insert(k, k));
                    }
                    black_box(map.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_read<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(2, size as u64);
        let keys = generate_keys(size, base_seed);
        let map = build::<M>(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let queries = generate_queries(&keys, &mut rng);
                    let start = Instant::now();
                    for key in &queries {
                        black_box(map.get(key).copied());
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_keys<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let keys = generate_keys(size, seed_base(3, size as u64));
        let map = build::<M>(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut sum = 0_u64;
                for key in map.keys() {
                    sum = sum.wrapping_add(*key);
                }
                black_box(sum)
            })
        });
    }
}

fn build<M: OrderedMap<Key = u64, Value = u64>>(keys: &[u64]) -> M {
    let mut rng = default_rng();
    let mut map = M::new();
    for &k in keys {
        let v: u64 = rng.random();
        black_box(map.insert(k, v));
    }
    map
}

fn generate_keys(size: usize, base_seed: u64) -> Vec<u64> {
    (0..size)
        .map(|i| mix_seed(base_seed ^ (i as u64)))
        .collect()
}

fn generate_queries(keys: &[u64], rng: &mut StdRng) -> Vec<u64> {
    (0..OPS_PER_ITER)
        .map(|_| {
            let hit = rng.random_range(0..100) < GET_HIT_RATE_PERCENT;
            if hit {
                keys[rng.random_range(0..keys.len())]
            } else {
                rng.random()
            }
        })
        .collect()
}

fn seed_base(workload_id: u64, size: u64) -> u64 {
    mix_seed(0x11B8_0000_2026_0000_u64 ^ (workload_id << 48) ^ size)
}

fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn bench_all_insert<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_insert::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_insert::<LlrbMap<u64, u64>, _>(group, "llrb");
}

pub fn bench_all_insert_sorted<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_insert_sorted::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_insert_sorted::<LlrbMap<u64, u64>, _>(group, "llrb");
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_read::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_read::<LlrbMap<u64, u64>, _>(group, "llrb");
}

pub fn bench_all_keys<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_keys::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_keys::<LlrbMap<u64, u64>, _>(group, "llrb");
}
