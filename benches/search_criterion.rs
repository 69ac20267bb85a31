use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::search::alpha_beta::{search_best_move, SearchConfig};
use plum_checkers::search::board_scoring::{AnnihilationScorer, MaterialScorer};

const MIDGAME: &str = ".w.w....
                       ..w...w.
                       .b.W....
                       ........
                       ...w.B..
                       b.b.....
                       ...b.b.b
                       ..B.....";

fn bench_search(c: &mut Criterion) {
    let positions = [
        ("opening", GameState::new_game()),
        (
            "kings_midgame",
            GameState::from_layout(MIDGAME, Color::Black).expect("benchmark layout should parse"),
        ),
    ];

    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (name, game) in &positions {
        for depth in [2u8, 4, 6] {
            let config = SearchConfig {
                depth,
                tie_break_jitter: 0.0,
                seed: None,
            };

            group.bench_with_input(
                BenchmarkId::new(format!("material_{name}"), depth),
                &config,
                |b, config| {
                    let mut rng = StdRng::seed_from_u64(7);
                    b.iter(|| {
                        let result =
                            search_best_move(black_box(game), &MaterialScorer, *config, &mut rng);
                        black_box(result.best_value)
                    });
                },
            );
        }

        let config = SearchConfig {
            depth: 4,
            tie_break_jitter: 0.5,
            seed: None,
        };
        group.bench_with_input(
            BenchmarkId::new(format!("annihilation_{name}"), config.depth),
            &config,
            |b, config| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| {
                    let result =
                        search_best_move(black_box(game), &AnnihilationScorer, *config, &mut rng);
                    black_box(result.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
