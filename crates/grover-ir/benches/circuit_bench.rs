//! Benchmarks for circuit construction.
//!
//! Run with: cargo bench -p grover-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use grover_ir::{Circuit, QubitId};

/// Benchmark circuit creation.
fn bench_circuit_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_creation");

    for num_qubits in &[2u32, 6, 10, 20] {
        group.bench_with_input(
            BenchmarkId::new("with_size", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Circuit::with_size(black_box("bench"), black_box(n), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark adding gates to a circuit.
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("h_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit.h(black_box(QubitId(0))).unwrap();
        });
    });

    group.bench_function("cx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit.cx(black_box(QubitId(0)), black_box(QubitId(1))).unwrap();
        });
    });

    group.bench_function("mcx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        let controls: Vec<_> = (0..9).map(QubitId).collect();
        b.iter(|| {
            circuit.mcx(black_box(controls.clone()), black_box(QubitId(9))).unwrap();
        });
    });

    group.finish();
}

/// Benchmark whole-circuit introspection.
fn bench_introspection(c: &mut Criterion) {
    let mut group = c.benchmark_group("introspection");

    let mut circuit = Circuit::with_size("bench", 8, 8);
    for _ in 0..64 {
        for q in 0..8 {
            circuit.h(QubitId(q)).unwrap();
        }
    }
    circuit.measure_all().unwrap();

    group.bench_function("depth", |b| {
        b.iter(|| black_box(&circuit).depth());
    });

    group.bench_function("count_ops", |b| {
        b.iter(|| black_box(&circuit).count_ops());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_circuit_creation,
    bench_gate_addition,
    bench_introspection
);
criterion_main!(benches);
