use crate::board::Board;
use crate::types::{Cell, Player};

const MATERIAL_WEIGHT: i32 = 10;
const MOBILITY_WEIGHT: i32 = 5;

/// Positional weights, shared read-only by every agent. Corners are
/// decisive; the X- and C-squares beside them tend to hand a corner to the
/// opponent, so they score heavily negative.
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Static evaluation from `player`'s perspective: positive favors `player`.
/// Weighted sum of material, square ownership, and mobility.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let (black_count, white_count) = board.count();
    let material = match player {
        Player::Black => black_count as i32 - white_count as i32,
        Player::White => white_count as i32 - black_count as i32,
    };

    let own_moves = board.legal_moves(player).count_ones() as i32;
    let opp_moves = board.legal_moves(player.opponent()).count_ones() as i32;

    material * MATERIAL_WEIGHT
        + position_score(board, player)
        + (own_moves - opp_moves) * MOBILITY_WEIGHT
}

fn position_score(board: &Board, player: Player) -> i32 {
    let own = match player {
        Player::Black => Cell::Black,
        Player::White => Cell::White,
    };

    let mut score = 0;
    for row in 0..8u8 {
        for col in 0..8u8 {
            let cell = board.cell(row, col);
            if cell == Cell::Empty {
                continue;
            }

            let weight = POSITION_WEIGHTS[row as usize][col as usize];
            score += if cell == own { weight } else { -weight };
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_is_dead_even_for_both_sides() {
        let board = Board::new();

        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric_between_the_sides() {
        let mut board = Board::new();
        assert!(board.apply_move(2, 3, Player::Black));

        assert_eq!(
            evaluate(&board, Player::Black),
            -evaluate(&board, Player::White)
        );
    }

    #[test]
    fn owning_a_corner_scores_its_full_weight() {
        // Lone black stone on a1: 1 stone of material, +100 position,
        // zero mobility either way.
        let board = Board::from_bitboards(1, 0);

        assert_eq!(evaluate(&board, Player::Black), 110);
        assert_eq!(evaluate(&board, Player::White), -110);
    }

    #[test]
    fn weight_table_is_symmetric_under_board_rotation() {
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(
                    POSITION_WEIGHTS[row][col],
                    POSITION_WEIGHTS[7 - row][7 - col]
                );
                assert_eq!(POSITION_WEIGHTS[row][col], POSITION_WEIGHTS[col][row]);
            }
        }
    }
}
