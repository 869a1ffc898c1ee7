// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Physics Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the Stuart–Landau kernel hot paths:
//!   - Derivative evaluation (canonical 3-rail and a 32-node network)
//!   - Single RK4 step
//!   - Short full integration
//!   - Coherence reduction over a recorded trajectory

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_complex::Complex64;

use trirail_physics::{
    global_coherence, random_initial_state, Rk4Stepper, SLNetwork,
};

const N_LARGE: usize = 32;

// ── Helpers ───────────────────────────────────────────────────────────

fn make_large_network() -> SLNetwork {
    let lambda: Vec<f64> = (0..N_LARGE).map(|i| 0.05 - 0.01 * (i % 5) as f64).collect();
    let omega: Vec<f64> = (0..N_LARGE).map(|i| 1.0 + 0.02 * i as f64).collect();
    let mut coupling = vec![0.0; N_LARGE * N_LARGE];
    for i in 0..N_LARGE {
        for j in 0..N_LARGE {
            if i != j {
                coupling[i * N_LARGE + j] = 0.05 * ((i + j) as f64 * 0.3).sin().abs();
            }
        }
    }
    SLNetwork::new(lambda, omega, coupling).unwrap()
}

fn make_state(n: usize) -> Vec<Complex64> {
    random_initial_state(n, 1e-3, 42)
}

// ── Derivative benchmarks ────────────────────────────────────────────

fn bench_derivative_canonical(c: &mut Criterion) {
    let net = SLNetwork::canonical();
    let z = make_state(3);
    let mut dz = vec![Complex64::new(0.0, 0.0); 3];
    c.bench_function("derivative_3", |b| {
        b.iter(|| net.derivative_into(black_box(&z), &mut dz))
    });
}

fn bench_derivative_large(c: &mut Criterion) {
    let net = make_large_network();
    let z = make_state(N_LARGE);
    let mut dz = vec![Complex64::new(0.0, 0.0); N_LARGE];
    c.bench_function("derivative_32", |b| {
        b.iter(|| net.derivative_into(black_box(&z), &mut dz))
    });
}

// ── Integrator benchmarks ────────────────────────────────────────────

fn bench_rk4_step_large(c: &mut Criterion) {
    let mut stepper = Rk4Stepper::new(make_large_network(), 0.01).unwrap();
    let mut z = make_state(N_LARGE);
    c.bench_function("rk4_step_32", |b| {
        b.iter(|| stepper.step(black_box(&mut z)).unwrap())
    });
}

fn bench_integrate_canonical_short(c: &mut Criterion) {
    let z0 = make_state(3);
    let mut stepper = Rk4Stepper::new(SLNetwork::canonical(), 0.02).unwrap();
    c.bench_function("integrate_3_100_steps", |b| {
        b.iter(|| stepper.integrate(black_box(&z0), 2.0).unwrap())
    });
}

// ── Coherence benchmarks ─────────────────────────────────────────────

fn bench_global_coherence(c: &mut Criterion) {
    let mut stepper = Rk4Stepper::new(make_large_network(), 0.01).unwrap();
    let traj = stepper.integrate(&make_state(N_LARGE), 5.0).unwrap();
    c.bench_function("global_coherence_32_500_steps", |b| {
        b.iter(|| global_coherence(black_box(&traj), None).unwrap())
    });
}

criterion_group!(
    benches,
    bench_derivative_canonical,
    bench_derivative_large,
    bench_rk4_step_large,
    bench_integrate_canonical_short,
    bench_global_coherence,
);
criterion_main!(benches);
