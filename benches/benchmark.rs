use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fraction32::Fraction;

fn sqrt_fraction(n: Fraction) -> Option<Fraction> {
    let mut prev;
    let mut curr;
    if n.is_negative() {
        return None;
    } else if n.is_zero() {
        return Some(Fraction::ZERO);
    } else if (n - 1).is_positive() {
        prev = (n + 1) / 2;
    } else {
        prev = Fraction::ONE;
    }

    curr = (n / prev + prev) / 2;
    for _ in 0..100 {
        if curr == prev {
            break;
        }
        prev = curr;
        curr = (n / prev + prev) / 2;
    }
    Some(curr)
}

fn sqrt_f64(n: f64) -> Option<f64> {
    let mut prev;
    let mut curr;
    if n.is_sign_negative() {
        return None;
    } else if n > 1.0 {
        prev = (n + 1.0) / 2.0;
    } else {
        prev = 1.0;
    }

    for _ in 0..100 {
        curr = (n / prev + prev) / 2.0;
        if (curr - prev).abs() < 1e-16 {
            return Some(curr);
        }
        prev = curr;
    }
    Some(prev)
}

// sum of 1/k for k in 1..=n; denominators overflow i32 quickly and get shrunk
fn harmonic(n: i32) -> Fraction {
    (1..=n).fold(Fraction::ZERO, |acc, k| acc + Fraction::ONE / k)
}

fn benchmark_fraction(c: &mut Criterion) {
    c.bench_function(
        "sqrt(fraction)",
        |b| b.iter(
            || sqrt_fraction(black_box(
                Fraction::new(rand::random_range(0..10_000), rand::random_range(1..10_000)).unwrap_or_default()
            ))));

    c.bench_function("harmonic(fraction, 64)", |b| b.iter(|| harmonic(black_box(64))));

    c.bench_function(
        "parse(fraction)",
        |b| b.iter(|| black_box("-1234567/7654321").parse::<Fraction>()));
}

fn benchmark_f64(c: &mut Criterion) {
    c.bench_function(
        "sqrt(f64)",
        |b| b.iter(
            || sqrt_f64(black_box(rand::random_range(0..10_000) as f64 / rand::random_range(1..10_000) as f64))
        )
    );
}

criterion_group!(benches, benchmark_fraction, benchmark_f64);
criterion_main!(benches);
