pub mod evaluator;
pub mod search;

use crate::board::Board;
use crate::types::{Player, Position};

pub const DEFAULT_MINIMAX_DEPTH: u8 = 4;

/// Move-selection tier. A closed set, picked once when the agent is built;
/// every variant answers the same choose-move contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform choice over the legal moves.
    Random,
    /// Maximize immediate captures; ties keep the earliest square.
    Greedy,
    /// Depth-bounded minimax with alpha-beta pruning.
    Minimax { depth: u8 },
}

/// An opposing agent bound to one side and one strategy for the whole
/// session. Stateless across calls: every decision is recomputed from the
/// board it is handed, and hypothetical moves only ever touch copies.
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    player: Player,
    strategy: Strategy,
}

impl Agent {
    pub fn new(player: Player, strategy: Strategy) -> Self {
        Self { player, strategy }
    }

    /// Difficulty knob used by the bindings layer: 1 = random, 2 = greedy,
    /// 3 and up = minimax at that depth.
    pub fn from_level(player: Player, level: u8) -> Self {
        let strategy = match level {
            0 | 1 => Strategy::Random,
            2 => Strategy::Greedy,
            depth => Strategy::Minimax { depth },
        };
        Self::new(player, strategy)
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Picks a move for the agent's side. `None` iff the side has no legal
    /// move, which the caller must treat as "this player passes", not as an
    /// error.
    pub fn choose_move(&self, board: &Board) -> Option<Position> {
        let legal = board.legal_moves(self.player);
        if legal == 0 {
            return None;
        }

        let moves = search::bitboard_to_positions(legal);
        let mv = match self.strategy {
            Strategy::Random => moves[fastrand::usize(..moves.len())],
            Strategy::Greedy => search::best_greedy(board, self.player, &moves),
            Strategy::Minimax { depth } => search::best_minimax(board, self.player, &moves, depth),
        };

        Some(Position {
            row: (mv / 8) as u8,
            col: (mv % 8) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_legal(board: &Board, player: Player, mv: Position) -> bool {
        board
            .legal_positions(player)
            .iter()
            .any(|p| p.row == mv.row && p.col == mv.col)
    }

    #[test]
    fn from_level_maps_to_the_three_tiers() {
        assert_eq!(
            Agent::from_level(Player::White, 1).strategy(),
            Strategy::Random
        );
        assert_eq!(
            Agent::from_level(Player::White, 2).strategy(),
            Strategy::Greedy
        );
        assert_eq!(
            Agent::from_level(Player::White, 4).strategy(),
            Strategy::Minimax { depth: 4 }
        );
    }

    #[test]
    fn every_tier_returns_a_legal_opening_move() {
        fastrand::seed(7);
        let board = Board::new();

        for strategy in [
            Strategy::Random,
            Strategy::Greedy,
            Strategy::Minimax {
                depth: DEFAULT_MINIMAX_DEPTH,
            },
        ] {
            let agent = Agent::new(Player::Black, strategy);
            let mv = agent.choose_move(&board).expect("opening has legal moves");
            assert!(is_legal(&board, Player::Black, mv), "{strategy:?}");
        }
    }

    #[test]
    fn stuck_agent_returns_none() {
        // Single black stone, white to move: nothing brackets.
        let board = Board::from_bitboards(1, 0);
        let agent = Agent::new(Player::White, Strategy::Minimax { depth: 4 });

        assert_eq!(agent.choose_move(&board), None);
    }

    #[test]
    fn deterministic_tiers_repeat_their_choice() {
        let board = Board::new();

        for strategy in [Strategy::Greedy, Strategy::Minimax { depth: 3 }] {
            let agent = Agent::new(Player::Black, strategy);
            assert_eq!(agent.choose_move(&board), agent.choose_move(&board));
        }
    }

    #[test]
    fn choosing_a_move_never_mutates_the_live_board() {
        let board = Board::new();
        let before = board;
        let agent = Agent::new(Player::Black, Strategy::Minimax { depth: 4 });

        let _ = agent.choose_move(&board);

        assert_eq!(board, before);
    }
}
