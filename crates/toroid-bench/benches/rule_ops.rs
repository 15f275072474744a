//! Criterion micro-benchmarks for the lattice rules and the step loop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use toroid_bench::{reference_profile, seeded_lattice, stress_profile};
use toroid_engine::Stepper;

const SIDE: usize = 128;

/// Benchmark: one threshold_growth pass over a 128x128 torus.
fn bench_threshold_growth(c: &mut Criterion) {
    let mut lattice = seeded_lattice(SIDE, SIDE, 42);
    c.bench_function("threshold_growth_128", |b| {
        b.iter(|| lattice.threshold_growth(black_box(4.0)));
    });
}

/// Benchmark: one scattering pass at gamma = 0.2.
fn bench_scattering(c: &mut Criterion) {
    let mut lattice = seeded_lattice(SIDE, SIDE, 42);
    c.bench_function("scattering_128", |b| {
        b.iter(|| lattice.scattering(black_box(0.2)));
    });
}

/// Benchmark: one diffusion step at c = 0.1.
fn bench_diffusion(c: &mut Criterion) {
    let mut lattice = seeded_lattice(SIDE, SIDE, 42);
    c.bench_function("diffusion_128", |b| {
        b.iter(|| lattice.diffusion(black_box(0.1)));
    });
}

/// Benchmark: one block rotation, advancing the phase each iteration.
fn bench_rotate_block(c: &mut Criterion) {
    let mut lattice = seeded_lattice(SIDE, SIDE, 42);
    let mut shift = 0;
    c.bench_function("rotate_block_128", |b| {
        b.iter(|| lattice.rotate_block(black_box(&mut shift)));
    });
}

/// Benchmark: heat and toggle, the in-place and copy-through stochastic rules.
fn bench_heat_toggle(c: &mut Criterion) {
    let mut lattice = seeded_lattice(SIDE, SIDE, 42);
    c.bench_function("heat_128", |b| {
        b.iter(|| lattice.heat(black_box(0.1), black_box(0.5)));
    });
    c.bench_function("toggle_128", |b| {
        b.iter(|| lattice.toggle(black_box(0.1)));
    });
}

/// Benchmark: full steps of the reference and stress profiles.
fn bench_profiles(c: &mut Criterion) {
    let mut reference = Stepper::new(reference_profile(42)).unwrap();
    c.bench_function("step_reference_profile", |b| {
        b.iter(|| black_box(reference.step()));
    });

    let mut stress = Stepper::new(stress_profile(42)).unwrap();
    c.bench_function("step_stress_profile", |b| {
        b.iter(|| black_box(stress.step()));
    });
}

criterion_group!(
    benches,
    bench_threshold_growth,
    bench_scattering,
    bench_diffusion,
    bench_rotate_block,
    bench_heat_toggle,
    bench_profiles
);
criterion_main!(benches);
