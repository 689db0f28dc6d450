use wideword::{I128, U128, U256};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_u128(c: &mut Criterion) {
    let x = U128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
    let y = U128::new(0x1, 0xFFFF_FFFF_FFFF_FFFF);

    c.bench_function("u128 mul", |b| b.iter(|| black_box(x) * black_box(y)));
    c.bench_function("u128 div_mod two-limb divisor", |b| {
        b.iter(|| black_box(x).div_mod(black_box(y)))
    });
    c.bench_function("u128 div_mod wide single-limb divisor", |b| {
        b.iter(|| black_box(x).div_mod(black_box(U128::from(0x8000_0000_0000_0001u64))))
    });
    c.bench_function("u128 to_string max", |b| b.iter(|| black_box(U128::MAX).to_string()));
}

pub fn bench_i128(c: &mut Criterion) {
    let x = I128::from(-7_000_000_000_000i64) * I128::from(3_000_000_000_000i64);
    let y = I128::from(-13i64);

    c.bench_function("i128 div_mod", |b| b.iter(|| black_box(x).div_mod(black_box(y))));
    c.bench_function("i128 to_string min", |b| b.iter(|| black_box(I128::MIN).to_string()));
}

pub fn bench_u256(c: &mut Criterion) {
    let x = U256::from([1u64, 2, 3, 4]);
    let y = U256::from([0u64, 7, 0, 5]);

    c.bench_function("u256 mul", |b| b.iter(|| black_box(x) * black_box(y)));
    c.bench_function("u256 div_mod", |b| b.iter(|| black_box(x).div_mod(black_box(y))));
    c.bench_function("u256 to_string max", |b| b.iter(|| black_box(U256::MAX).to_string()));
}

criterion_group!(benches, bench_u128, bench_i128, bench_u256);
criterion_main!(benches);
