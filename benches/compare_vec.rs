#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rawmem_vec::{CloneInto, GrowExact, Relocate, Vector};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("vector push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector clone-into push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize, CloneInto>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector exact push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize, Relocate, GrowExact>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("vector with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vector::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("stdvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        let positions: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(count as u64);
            (0..count).map(|len| rng.gen_range(0..=len)).collect()
        };

        c.bench_function(&format!("vector insert {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for (value, index) in positions.iter().enumerate() {
                    buf.insert(*index, black_box(value));
                }
            });
        });

        c.bench_function(&format!("stdvec insert {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for (value, index) in positions.iter().enumerate() {
                    buf.insert(*index, black_box(value));
                }
            });
        });

        let strings = Vector::<String>::from_iter((0..count).map(|i| i.to_string()));
        let std_strings: Vec<String> = strings.iter().cloned().collect();

        c.bench_function(&format!("vector clone {} strings", count), |b| {
            b.iter(|| black_box(&strings).clone());
        });

        c.bench_function(&format!("stdvec clone {} strings", count), |b| {
            b.iter(|| black_box(&std_strings).clone());
        });

        c.bench_function(&format!("vector extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
