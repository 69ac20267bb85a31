//! Frequency-learning agent.
//!
//! Scores each legal successor by how games that passed through the same
//! relative board went before, picks the best (random among equals), and
//! feeds the final result back into the shared table when the game ends.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::{Agent, AgentOutcome, AgentOutput, MoveConstraints};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_successors;
use crate::tables::learning_table::{lock_table, SharedLearningTable};

pub struct StateLearnerEngine {
    table: SharedLearningTable,
    visited: Vec<String>,
    rng: StdRng,
}

impl StateLearnerEngine {
    pub fn new(table: SharedLearningTable) -> Self {
        Self::with_seed(table, rand::rng().random())
    }

    pub fn with_seed(table: SharedLearningTable, seed: u64) -> Self {
        Self {
            table,
            visited: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Successor keys chosen so far in the current game.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Agent for StateLearnerEngine {
    fn name(&self) -> &str {
        "StateLearner"
    }

    fn new_game(&mut self) {
        self.visited.clear();
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        constraints: &MoveConstraints,
    ) -> CheckersResult<AgentOutput> {
        let me = game_state.side_to_move;
        let successors = generate_successors(game_state);
        assert!(
            !successors.is_empty(),
            "state learner asked to move for {me} with no legal moves"
        );

        let scored: Vec<(f64, String, usize)> = {
            let table = lock_table(&self.table)?;
            successors
                .iter()
                .enumerate()
                .map(|(i, generated)| {
                    let key = generated.game_after_move.encode_relative(me);
                    (table.score(&key), key, i)
                })
                .collect()
        };

        let top = scored
            .iter()
            .map(|(score, _, _)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best: Vec<&(f64, String, usize)> =
            scored.iter().filter(|(score, _, _)| *score == top).collect();
        let Some(&&(score, ref key, index)) = best.choose(&mut self.rng) else {
            panic!("state learner found no top-scoring successor for {me}");
        };

        self.visited.push(key.clone());

        let mut out = AgentOutput::new(successors[index].mv);
        out.info_lines.push(format!(
            "learner candidates {} tied {} score {:.3} must_jump {}",
            successors.len(),
            best.len(),
            score,
            constraints.must_jump
        ));
        Ok(out)
    }

    fn on_result(&mut self, outcome: AgentOutcome) {
        match lock_table(&self.table) {
            Ok(mut table) => {
                for key in &self.visited {
                    table.record(key, outcome);
                }
            }
            Err(err) => log::error!("state learner dropped {} states: {err}", self.visited.len()),
        }
        self.visited.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Color;
    use crate::tables::learning_table::LearningTable;

    #[test]
    fn results_are_written_to_the_shared_table() {
        let table = LearningTable::new_shared();
        let mut learner = StateLearnerEngine::with_seed(table.clone(), 5);
        let game = GameState::new_game();

        let out = learner
            .choose_move(&game, &MoveConstraints::from_state(&game))
            .expect("learner should move");
        assert!(game.check_move(out.chosen_move).is_some());
        assert_eq!(learner.visited().len(), 1);

        let key = learner.visited()[0].clone();
        learner.on_result(AgentOutcome::Win);
        assert!(learner.visited().is_empty());

        let stats = lock_table(&table)
            .expect("lock")
            .stats(&key)
            .expect("key recorded");
        assert_eq!((stats.seen, stats.won), (1, 1));
    }

    #[test]
    fn avoids_states_that_lost_before() {
        let table = LearningTable::new_shared();
        let game = GameState::new_game();

        // Mark every opening successor but one as a known loss.
        let successors = generate_successors(&game);
        let keep = successors[3].mv;
        {
            let mut t = lock_table(&table).expect("lock");
            for generated in &successors {
                if generated.mv != keep {
                    t.record(
                        &generated.game_after_move.encode_relative(Color::Black),
                        AgentOutcome::Loss,
                    );
                }
            }
        }

        let mut learner = StateLearnerEngine::with_seed(table, 1);
        let out = learner
            .choose_move(&game, &MoveConstraints::from_state(&game))
            .expect("learner should move");
        assert_eq!(out.chosen_move, keep);
    }

    #[test]
    fn learners_share_one_table() {
        let table = LearningTable::new_shared();
        let mut a = StateLearnerEngine::with_seed(table.clone(), 1);
        let mut b = StateLearnerEngine::with_seed(table.clone(), 2);
        let game = GameState::new_game();
        let constraints = MoveConstraints::from_state(&game);

        a.choose_move(&game, &constraints).expect("move");
        b.choose_move(&game, &constraints).expect("move");
        let key_a = a.visited()[0].clone();
        let key_b = b.visited()[0].clone();
        a.on_result(AgentOutcome::Draw);
        b.on_result(AgentOutcome::Loss);

        let t = lock_table(&table).expect("lock");
        let a_stats = t.stats(&key_a).expect("a recorded");
        let b_stats = t.stats(&key_b).expect("b recorded");
        if key_a == key_b {
            assert_eq!((a_stats.seen, a_stats.drawn, a_stats.lost), (2, 1, 1));
        } else {
            assert_eq!((a_stats.seen, a_stats.drawn), (1, 1));
            assert_eq!((b_stats.seen, b_stats.lost), (1, 1));
        }
    }
}
