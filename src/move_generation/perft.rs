//! Move-path enumeration for validating move generation.
//!
//! Every applied move (including each leg of a multi-jump) counts as one
//! level of depth.

use crate::game_state::checkers_types::MoveKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move_with_undo, unmake_move};
use crate::move_generation::legal_move_generator::{generate_successors, possible_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub jumps: usize,
    pub promotions: usize,
    pub continuations: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.jumps += rhs.jumps;
        self.promotions += rhs.promotions;
        self.continuations += rhs.continuations;
    }
}

/// Perft using make/unmake on a single scratch state.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.copy(false);
    perft_in_place(&mut scratch, depth)
}

fn perft_in_place(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in possible_moves(game_state, game_state.side_to_move) {
        let Some(undo) = make_move_with_undo(game_state, mv) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if undo.kind == MoveKind::Jump {
                total.jumps += 1;
            }
            if undo.promoted {
                total.promotions += 1;
            }
            if game_state.pinned_piece.is_some() {
                total.continuations += 1;
            }
        } else {
            total.merge(perft_in_place(game_state, depth - 1));
        }

        unmake_move(game_state, undo);
    }
    total
}

/// Perft that clones a fresh state for every node. Slower; used to cross-check
/// the make/unmake path.
pub fn perft_with_copies(game_state: &GameState, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    generate_successors(game_state)
        .iter()
        .map(|generated| perft_with_copies(&generated.game_after_move, depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Color;

    #[test]
    fn opening_perft_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0).nodes, 1);
        assert_eq!(perft(&game, 1).nodes, 7);
        assert_eq!(perft(&game, 2).nodes, 49);
        assert_eq!(perft(&game, 2).jumps, 0);
    }

    #[test]
    fn make_unmake_and_copy_paths_agree() {
        let game = GameState::new_game();
        for depth in 0..=5 {
            assert_eq!(perft(&game, depth).nodes, perft_with_copies(&game, depth));
        }
    }

    #[test]
    fn perft_leaves_the_input_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        let _ = perft(&game, 4);
        assert_eq!(game, before);
    }

    #[test]
    fn counts_jump_continuations() {
        let game = GameState::from_layout(
            "........
             ........
             ........
             ....w...
             ........
             ..w.....
             .b......
             ........",
            Color::Black,
        )
        .expect("layout should parse");
        let counts = perft(&game, 1);
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.jumps, 1);
        assert_eq!(counts.continuations, 1);
    }
}
