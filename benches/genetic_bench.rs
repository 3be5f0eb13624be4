//! Criterion benchmarks for u-genetic.
//!
//! Uses a fixed 0/1 knapsack instance so the numbers reflect engine and
//! operator overhead rather than problem cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::Rng;
use u_genetic::ga::{
    tournament_winner, Fitness, NPointCrossover, Operators, Population, RandomizedBinaryMutation,
    RouletteSelection, Selection, StaticFitness, TournamentSelection, Wheel,
};
use u_genetic::random::{create_rng, unique_indices};

// ===========================================================================
// Knapsack: maximize packed value under a weight limit
// ===========================================================================

const WEIGHT_LIMIT: i64 = 31;
#[rustfmt::skip]
const ITEMS: [(i64, i64); 20] = [
    (10, 30), (5, 20), (15, 50), (20, 60), (2, 10),
    (8, 14), (12, 31), (14, 45), (18, 20), (21, 67),
    (1, 7), (3, 14), (9, 30), (19, 45), (29, 84),
    (14, 41), (22, 35), (41, 0), (0, 10), (31, 103),
];

fn packing_fitness(packing: &Vec<bool>) -> Fitness {
    let mut weight = 0;
    let mut value = 0;
    for (&packed, &(w, v)) in packing.iter().zip(ITEMS.iter()) {
        if packed {
            weight += w;
            if weight > WEIGHT_LIMIT {
                return -1;
            }
            value += v;
        }
    }
    value
}

fn random_packing(rng: &mut StdRng) -> Vec<bool> {
    (0..ITEMS.len()).map(|_| rng.random_bool(0.5)).collect()
}

fn bench_evolve_once<S: Selection<Vec<bool>>>(c: &mut Criterion, name: &str, selection: S) {
    let operators = Operators::new(
        selection,
        NPointCrossover::single_point(),
        StaticFitness::new(packing_fitness),
    )
    .with_mutation(RandomizedBinaryMutation::new(0.02).expect("valid rate"));
    let mut population =
        Population::new(60, random_packing, operators, create_rng(42)).expect("valid population");

    c.bench_function(&format!("evolve_once/{name}"), |b| {
        b.iter(|| {
            population.evolve_once(black_box(2)).expect("generation");
        })
    });
}

fn bench_generations(c: &mut Criterion) {
    for pool in [2, 5, 10] {
        bench_evolve_once(
            c,
            &format!("tournament_pool{pool}"),
            TournamentSelection::new(pool).expect("valid pool"),
        );
    }
    bench_evolve_once(c, "roulette", RouletteSelection::default());
}

// ===========================================================================
// Selection primitives
// ===========================================================================

fn bench_roulette_spin(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let fitnesses: Vec<Fitness> = (0..100).map(|_| rng.random_range(0..50_000)).collect();
    let wheel = Wheel::new(&fitnesses);

    c.bench_function("roulette_spin/100", |b| {
        b.iter(|| black_box(wheel.spin(&mut rng)))
    });
}

fn bench_tournament_winner(c: &mut Criterion) {
    let mut group = c.benchmark_group("tournament_winner");
    for (population_size, pool_size) in [(50, 2), (100, 2), (1000, 2), (50, 5), (50, 10)] {
        let mut rng = create_rng(42);
        let fitnesses: Vec<Fitness> = (0..population_size)
            .map(|_| rng.random_range(0..50_000))
            .collect();
        group.bench_with_input(
            BenchmarkId::new(format!("pop{population_size}"), pool_size),
            &pool_size,
            |b, &pool| {
                b.iter(|| {
                    let contestants = unique_indices(&mut rng, population_size, pool);
                    black_box(tournament_winner(&contestants, &fitnesses))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generations,
    bench_roulette_spin,
    bench_tournament_winner
);
criterion_main!(benches);
