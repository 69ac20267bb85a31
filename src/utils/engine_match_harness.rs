//! Head-to-head match runner.
//!
//! Drives the turn loop between two `Agent` implementations, re-polls an
//! agent that proposes an illegal move (up to a bound), reports the result to
//! both agents and aggregates series statistics.

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::{Agent, AgentOutcome, MoveConstraints};
use crate::game_state::checkers_types::{Color, GameResult};
use crate::game_state::game_state::GameState;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Consecutive rejected proposals tolerated from one agent on one turn.
    pub max_illegal_attempts: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_illegal_attempts: 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: GameResult,
    pub final_state: GameState,
    /// Move counts and timings cover accepted moves only; rejected
    /// proposals are tallied in `illegal_attempts`.
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub illegal_attempts: u32,
}

impl MatchResult {
    /// Deduplicated board snapshots, one per applied move.
    pub fn history(&self) -> &[String] {
        &self.final_state.history
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    fn new(games: u16) -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            games,
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            outcomes: Vec::with_capacity(usize::from(games)),
            player1_moves: 0,
            player2_moves: 0,
            player1_total_time_ns: 0,
            player2_total_time_ns: 0,
            player1_avg_move_time_ms: 0.0,
            player2_avg_move_time_ms: 0.0,
            overall_avg_move_time_ms: 0.0,
        }
    }

    pub fn report(&self) -> String {
        format!(
            "started={} elapsed_s={} games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            (self.finished_at - self.started_at).num_seconds(),
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play one game from the standard starting position.
pub fn play_match(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    play_match_from_state(GameState::new_game(), white, black, config)
}

/// Play one game from a caller-provided state.
pub fn play_match_from_state(
    mut state: GameState,
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    white.new_game();
    black.new_game();
    log::info!("match start: {} (White) vs {} (Black)", white.name(), black.name());

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut illegal_attempts = 0u32;

    let outcome = loop {
        if let Some(outcome) = state.check_end_game() {
            break outcome;
        }

        let mover = state.side_to_move;
        let agent: &mut dyn Agent = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let constraints = MoveConstraints::from_state(&state);

        let mut rejected = 0u32;
        loop {
            let started = Instant::now();
            let out = agent.choose_move(&state, &constraints)?;
            let elapsed_ns = started.elapsed().as_nanos();

            for line in &out.info_lines {
                log::debug!("[{}] {line}", agent.name());
            }

            if state.make_move(out.chosen_move) {
                match mover {
                    Color::White => {
                        white_move_count = white_move_count.saturating_add(1);
                        white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
                    }
                    Color::Black => {
                        black_move_count = black_move_count.saturating_add(1);
                        black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
                    }
                }
                log::debug!("turn {}: {}", state.turn, out.chosen_move);
                break;
            }

            rejected += 1;
            illegal_attempts += 1;
            log::warn!(
                "{} proposed illegal move {} ({rejected}/{})",
                agent.name(),
                out.chosen_move,
                config.max_illegal_attempts
            );
            if rejected >= config.max_illegal_attempts {
                return Err(CheckersError::TooManyIllegalMoves {
                    color: mover,
                    attempts: rejected,
                });
            }
        }
    };

    let (white_outcome, black_outcome) = match outcome {
        GameResult::WhiteWin => (AgentOutcome::Win, AgentOutcome::Loss),
        GameResult::BlackWin => (AgentOutcome::Loss, AgentOutcome::Win),
        GameResult::Draw => (AgentOutcome::Draw, AgentOutcome::Draw),
    };
    white.on_result(white_outcome);
    black.on_result(black_outcome);
    log::info!(
        "match end: {outcome:?} after {} turns, {} snapshots",
        state.turn,
        state.history.len()
    );
    log::debug!("final position:\n{}", render_game_state(&state));

    Ok(MatchResult {
        outcome,
        final_state: state,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
        illegal_attempts,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Agent>,
    F2: Fn() -> Box<dyn Agent>,
{
    let mut stats = MatchSeriesStats::new(config.games);
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_white {
            play_match(player1.as_mut(), player2.as_mut(), &config.per_game)?
        } else {
            play_match(player2.as_mut(), player1.as_mut(), &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome.winner() {
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
            Some(color) => {
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            log::info!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.finished_at = Utc::now();
    stats.player1_avg_move_time_ms = avg_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = avg_ms(stats.player2_total_time_ns, stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ms(
        stats.player1_total_time_ns + stats.player2_total_time_ns,
        stats.player1_moves + stats.player2_moves,
    );

    Ok(stats)
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers_errors::CheckersResult;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_state_learner::StateLearnerEngine;
    use crate::engines::engine_trait::AgentOutput;
    use crate::game_state::checkers_types::{Direction, Move, Position};
    use crate::tables::learning_table::{lock_table, LearningTable};

    #[test]
    fn random_agents_finish_a_game() {
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);
        let result =
            play_match(&mut white, &mut black, &MatchConfig::default()).expect("game should run");

        assert_eq!(result.final_state.check_end_game(), Some(result.outcome));
        assert_eq!(result.illegal_attempts, 0);
        assert!(result.black_move_count >= 1);
        assert!(!result.history().is_empty());
        for pair in result.history().windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    /// Always proposes the same backwards move.
    struct Stubborn;

    impl Agent for Stubborn {
        fn name(&self) -> &str {
            "Stubborn"
        }

        fn choose_move(
            &mut self,
            game_state: &GameState,
            _constraints: &MoveConstraints,
        ) -> CheckersResult<AgentOutput> {
            Ok(AgentOutput::new(Move::new(
                game_state.side_to_move,
                Position::new(5, 0),
                Direction::DownRight,
            )))
        }
    }

    #[test]
    fn illegal_proposals_are_bounded() {
        let mut white = RandomEngine::with_seed(1);
        let mut black = Stubborn;
        let config = MatchConfig {
            max_illegal_attempts: 4,
        };
        let err = play_match(&mut white, &mut black, &config).expect_err("should give up");
        assert_eq!(
            err,
            CheckersError::TooManyIllegalMoves {
                color: Color::Black,
                attempts: 4
            }
        );
    }

    /// Proposes a move from an empty light square before every real move.
    struct RejectedFirst {
        inner: RandomEngine,
        reject_next: bool,
    }

    impl Agent for RejectedFirst {
        fn name(&self) -> &str {
            "RejectedFirst"
        }

        fn choose_move(
            &mut self,
            game_state: &GameState,
            constraints: &MoveConstraints,
        ) -> CheckersResult<AgentOutput> {
            self.reject_next = !self.reject_next;
            if self.reject_next {
                return Ok(AgentOutput::new(Move::new(
                    game_state.side_to_move,
                    Position::new(0, 0),
                    Direction::DownRight,
                )));
            }
            self.inner.choose_move(game_state, constraints)
        }
    }

    #[test]
    fn rejected_proposals_are_not_counted_as_moves() {
        let mut white = RandomEngine::with_seed(4);
        let mut black = RejectedFirst {
            inner: RandomEngine::with_seed(5),
            reject_next: false,
        };
        let result =
            play_match(&mut white, &mut black, &MatchConfig::default()).expect("game should run");

        assert!(result.black_move_count >= 1);
        assert_eq!(result.illegal_attempts, result.black_move_count);
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize,
            result.history().len()
        );
    }

    #[test]
    fn finished_positions_report_immediately() {
        let state = GameState::from_layout(
            ".b......
             ........
             ........
             ........
             ........
             ........
             ........
             ......w.",
            Color::Black,
        )
        .expect("layout should parse");
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);
        let result = play_match_from_state(state, &mut white, &mut black, &MatchConfig::default())
            .expect("game should run");
        assert_eq!(result.outcome, GameResult::WhiteWin);
        assert_eq!(result.white_move_count + result.black_move_count, 0);
    }

    #[test]
    fn learners_update_the_table_after_each_game() {
        let table = LearningTable::new_shared();
        let mut white = StateLearnerEngine::with_seed(table.clone(), 1);
        let mut black = RandomEngine::with_seed(2);
        play_match(&mut white, &mut black, &MatchConfig::default()).expect("game should run");

        assert!(!lock_table(&table).expect("lock").is_empty());
        assert!(white.visited().is_empty());
    }

    #[test]
    fn series_counts_every_game() {
        let stats = play_match_series(
            || Box::new(AlphaBetaEngine::new(1)) as Box<dyn Agent>,
            || Box::new(RandomEngine::new()) as Box<dyn Agent>,
            MatchSeriesConfig {
                games: 3,
                base_seed: 42,
                ..MatchSeriesConfig::default()
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_moves > 0);
        assert!(stats.report().contains("games=3"));
    }
}
