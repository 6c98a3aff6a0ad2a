//! Benchmarks for bonespring chain simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use bonespring::*;

fn zigzag(bones: usize) -> std::vec::Vec<Vec2<f32>> {
    (0..=bones)
        .map(|i| Vec2::new(100.0 + i as f32 * 20.0, if i % 2 == 0 { 100.0 } else { 120.0 }))
        .collect()
}

fn bench_single_bone(c: &mut Criterion) {
    c.bench_function("pendulum_1000_steps", |b| {
        b.iter(|| {
            let sim: Simulator<f32> = Simulator::default();
            let mut bones = vec![Bone::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 0.0, 1.0)];
            for _ in 0..1000 {
                sim.step(&mut bones, 1.0 / 120.0);
            }
            bones[0].joint2.pos
        });
    });
}

fn bench_chain_simulation(c: &mut Criterion) {
    c.bench_function("chain_50_bones_60_steps", |b| {
        b.iter(|| {
            let mut bones = chain(&zigzag(50), 1.0);
            bones[0].joint1.mass = 0.0;
            let sim = Simulator::new(SimConfig::init(None));
            for _ in 0..60 {
                sim.step(&mut bones, 1.0 / 120.0);
            }
            flat_positions(&bones)
        });
    });
}

fn bench_chain_with_ground(c: &mut Criterion) {
    c.bench_function("chain_50_bones_ground_60_steps", |b| {
        b.iter(|| {
            let mut bones = chain(&zigzag(50), 1.0);
            let sim = Simulator::new(SimConfig::init(None));
            let ground = Ground::new(400.0, 1.5);
            for _ in 0..60 {
                sim.step(&mut bones, 1.0 / 120.0);
                ground.apply(&mut bones, 1.0 / 120.0, sim.config());
            }
            flat_positions(&bones)
        });
    });
}

criterion_group!(benches, bench_single_bone, bench_chain_simulation, bench_chain_with_ground);
criterion_main!(benches);
