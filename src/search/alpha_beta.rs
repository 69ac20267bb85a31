//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every node is explored on a history-free copy of the parent state. The
//! maximizing side at a node is decided by who is to move there, so the extra
//! plies of a multi-jump (same side moving again) need no special casing.

use rand::Rng;

use crate::game_state::checkers_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_successors;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched below each root candidate.
    pub depth: u8,
    /// Upper bound of the uniform noise added to each root value. Must stay
    /// below the smallest material step so it only reorders equal values.
    pub tie_break_jitter: f64,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            tie_break_jitter: 0.5,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// Unjittered value of `best_move`.
    pub best_value: i32,
    pub nodes: u64,
    /// Every root candidate with its unjittered value, in generation order.
    pub candidates: Vec<(Move, i32)>,
}

/// Pick the best move for the side to move.
///
/// # Panics
///
/// Panics when the side to move has no legal move; the end-game check must
/// run before a search is requested.
pub fn search_best_move<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let perspective = game_state.side_to_move;
    let successors = generate_successors(game_state);
    assert!(
        !successors.is_empty(),
        "search requested for {perspective} with no legal moves"
    );

    let mut nodes = 0u64;
    let mut candidates = Vec::with_capacity(successors.len());
    let mut best: Option<(Move, i32, f64)> = None;

    for generated in successors {
        let value = alpha_beta(
            &generated.game_after_move,
            scorer,
            perspective,
            config.depth,
            i32::MIN,
            i32::MAX,
            &mut nodes,
        );
        let jitter = if config.tie_break_jitter > 0.0 {
            rng.random::<f64>() * config.tie_break_jitter
        } else {
            0.0
        };
        let ranked = f64::from(value) + jitter;

        candidates.push((generated.mv, value));
        if best.is_none_or(|(_, _, top)| ranked > top) {
            best = Some((generated.mv, value, ranked));
        }
    }

    let Some((best_move, best_value, _)) = best else {
        unreachable!("successor list was checked non-empty");
    };
    SearchResult {
        best_move,
        best_value,
        nodes,
        candidates,
    }
}

/// Alpha-beta value of `game_state` for `perspective`.
pub fn alpha_beta<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    perspective: Color,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || game_state.check_end_game().is_some() {
        return scorer.score(game_state, perspective);
    }

    let successors = generate_successors(game_state);
    if game_state.side_to_move == perspective {
        let mut best = i32::MIN;
        for generated in successors {
            let value = alpha_beta(
                &generated.game_after_move,
                scorer,
                perspective,
                depth - 1,
                alpha,
                beta,
                nodes,
            );
            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                return best;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for generated in successors {
            let value = alpha_beta(
                &generated.game_after_move,
                scorer,
                perspective,
                depth - 1,
                alpha,
                beta,
                nodes,
            );
            best = best.min(value);
            beta = beta.min(value);
            if alpha >= beta {
                return best;
            }
        }
        best
    }
}

/// Plain minimax without pruning; same values as [`alpha_beta`], more nodes.
pub fn minimax<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    perspective: Color,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || game_state.check_end_game().is_some() {
        return scorer.score(game_state, perspective);
    }

    let values = generate_successors(game_state).into_iter().map(|generated| {
        minimax(
            &generated.game_after_move,
            scorer,
            perspective,
            depth - 1,
            nodes,
        )
    });

    if game_state.side_to_move == perspective {
        values.max().unwrap_or(i32::MIN)
    } else {
        values.min().unwrap_or(i32::MAX)
    }
}
