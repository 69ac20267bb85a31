//! Standalone agent-vs-agent series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series -- --player1 alphabeta --player2 learner --games 20`
//! `cargo run --release --bin match_series -- --verbose`

use clap::Parser;

use plum_checkers::checkers_errors::{CheckersError, CheckersResult};
use plum_checkers::engines::engine_alpha_beta::AlphaBetaEngine;
use plum_checkers::engines::engine_neural::NeuralEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_state_learner::StateLearnerEngine;
use plum_checkers::engines::engine_trait::Agent;
use plum_checkers::search::dense_network::DenseNetwork;
use plum_checkers::tables::learning_table::{lock_table, LearningTable, SharedLearningTable};
use plum_checkers::utils::engine_match_harness::{
    play_match_series, MatchConfig, MatchSeriesConfig,
};

/// Play a series of checkers games between two agents.
#[derive(Parser)]
#[command(name = "match_series")]
#[command(about = "Run a checkers match series between two agents")]
struct Cli {
    /// Number of games to play.
    #[arg(short, long, default_value = "10")]
    games: u16,

    /// Seed for color assignment.
    #[arg(long, default_value = "1234")]
    seed: u64,

    /// Search depth for alphabeta agents.
    #[arg(short, long, default_value = "3")]
    depth: u8,

    /// First agent: random, alphabeta, alphabeta-annihilation, learner or neural.
    #[arg(long, default_value = "alphabeta")]
    player1: String,

    /// Second agent: random, alphabeta, alphabeta-annihilation, learner or neural.
    #[arg(long, default_value = "random")]
    player2: String,

    /// Rejected proposals tolerated per turn before a game is abandoned.
    #[arg(long, default_value = "16")]
    max_illegal_attempts: u32,

    /// Log every game result and move (debug level).
    #[arg(short, long)]
    verbose: bool,
}

/// Agent names accepted by `--player1` / `--player2`.
const AGENT_NAMES: [&str; 5] = [
    "random",
    "alphabeta",
    "alphabeta-annihilation",
    "learner",
    "neural",
];

/// Build a factory for the named agent; learners share `table`.
fn agent_factory(
    name: &str,
    depth: u8,
    table: &SharedLearningTable,
) -> CheckersResult<Box<dyn Fn() -> Box<dyn Agent>>> {
    match name {
        "random" => Ok(Box::new(|| Box::new(RandomEngine::new()) as Box<dyn Agent>)),
        "alphabeta" => Ok(Box::new(move || {
            Box::new(AlphaBetaEngine::new(depth)) as Box<dyn Agent>
        })),
        "alphabeta-annihilation" => Ok(Box::new(move || {
            Box::new(AlphaBetaEngine::new_annihilation(depth)) as Box<dyn Agent>
        })),
        "neural" => {
            // Input width is checked once here; games share the weights.
            let network = DenseNetwork::material_baseline()?;
            NeuralEngine::from_network(network.clone())?;
            Ok(Box::new(move || {
                Box::new(NeuralEngine::with_scorer(network.clone())) as Box<dyn Agent>
            }))
        }
        "learner" => {
            let table = table.clone();
            Ok(Box::new(move || {
                Box::new(StateLearnerEngine::new(table.clone())) as Box<dyn Agent>
            }))
        }
        other => Err(CheckersError::InvalidAgent(other.to_owned())),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let table = LearningTable::new_shared();
    let player1 = agent_factory(&cli.player1, cli.depth, &table)?;
    let player2 = agent_factory(&cli.player2, cli.depth, &table)?;

    log::info!(
        "series: {} games, {} vs {}, depth {}",
        cli.games,
        cli.player1,
        cli.player2,
        cli.depth
    );

    let stats = play_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: cli.games,
            base_seed: cli.seed,
            per_game: MatchConfig {
                max_illegal_attempts: cli.max_illegal_attempts,
            },
            verbose: cli.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    let learned = lock_table(&table)?.len();
    if learned > 0 {
        println!("learning table states: {learned}");
    }
    Ok(())
}
