//! Criterion benchmarks for model generation.
//!
//! Movement linking dominates build time (`|events| x (|teams| - 1)^2`
//! instances), so the groups scale the team count at a fixed double
//! round-robin horizon of `2 * (n - 1)` periods.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;
use u_league::constraints::movement_linking;
use u_league::{build, IndexSets, ModelConfig, PeriodId, TeamId};

/// Distinct, non-contiguous team ids in random order.
fn random_teams<R: Rng>(n: usize, rng: &mut R) -> Vec<TeamId> {
    let mut teams: Vec<TeamId> = (0..n as i64).map(|i| 100 + 7 * i).collect();
    teams.shuffle(rng);
    teams
}

fn horizon(n: usize) -> Vec<PeriodId> {
    (1..=2 * (n as i64 - 1)).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let mut rng = rand::rng();
    let config = ModelConfig::new(1);

    for n in [4, 6, 8, 10] {
        let teams = random_teams(n, &mut rng);
        let periods = horizon(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| build(black_box(&teams), black_box(&periods), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_movement_linking(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement_linking");
    let mut rng = rand::rng();
    let config = ModelConfig::new(1);

    for n in [6, 10, 14] {
        let sets = IndexSets::generate(&random_teams(n, &mut rng), &horizon(n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &sets, |b, sets| {
            b.iter(|| movement_linking(black_box(sets), &config))
        });
    }

    group.finish();
}

fn bench_lp_export(c: &mut Criterion) {
    let mut rng = rand::rng();
    let n = 8;
    let model = build(&random_teams(n, &mut rng), &horizon(n), &ModelConfig::new(1)).unwrap();

    c.bench_function("to_lp/8", |b| b.iter(|| black_box(&model).to_lp().unwrap()));
}

criterion_group!(benches, bench_build, bench_movement_linking, bench_lp_export);
criterion_main!(benches);
