use std::collections::HashMap;

use bracket_core::{
    assign_seeds, build_first_round, select_top, simulate_once, FieldEntry, MarginModel,
    Matchup, SimConfig, StatsOracle,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_oracle() -> StatsOracle {
    let mut stats = HashMap::new();
    for i in 0..64 {
        let row: HashMap<String, f64> = [
            ("ORtg".to_string(), 100.0 + (i as f64 % 20.0)),
            ("DRtg".to_string(), 95.0 + (i as f64 % 15.0)),
            ("SRS".to_string(), 20.0 - (i as f64 / 4.0)),
        ]
        .into_iter()
        .collect();
        stats.insert(format!("Team{}", i), row);
    }

    let schema = vec!["ORtg".to_string(), "DRtg".to_string(), "SRS".to_string()];
    StatsOracle::new(stats, schema, MarginModel::new(vec![1.0, -1.0, 0.5], 11.0)).unwrap()
}

fn create_64_team_matchups() -> Vec<Matchup> {
    let field: Vec<FieldEntry> = (0..64)
        .map(|i| FieldEntry::new(format!("Team{}", i), 100.0 - i as f64))
        .collect();
    let slots = assign_seeds(&field).unwrap();
    build_first_round(&slots)
}

fn bench_seeding(c: &mut Criterion) {
    let field: Vec<FieldEntry> = (0..64)
        .map(|i| FieldEntry::new(format!("Team{}", i), 100.0 - i as f64))
        .collect();

    c.bench_function("assign_seeds_64", |b| {
        b.iter(|| assign_seeds(black_box(&field)).unwrap())
    });

    let slots = assign_seeds(&field).unwrap();
    c.bench_function("build_first_round_64", |b| {
        b.iter(|| build_first_round(black_box(&slots)))
    });
}

fn bench_single_playout(c: &mut Criterion) {
    let matchups = create_64_team_matchups();
    let oracle = create_oracle();

    c.bench_function("bracket_single_playout", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            simulate_once(black_box(&matchups), black_box(&oracle), &mut rng).unwrap()
        })
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let matchups = create_64_team_matchups();
    let oracle = create_oracle();
    let config = SimConfig {
        trials: 1000,
        top_k: 2,
        seed: 42,
    };

    c.bench_function("bracket_1000_trials_batch", |b| {
        b.iter(|| select_top(black_box(&matchups), black_box(&oracle), &config).unwrap())
    });
}

criterion_group!(benches, bench_seeding, bench_single_playout, bench_monte_carlo);
criterion_main!(benches);
