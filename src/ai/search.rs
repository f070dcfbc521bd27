use crate::ai::evaluator;
use crate::board::Board;
use crate::types::Player;

const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Greedy tier: the move capturing the most stones right now. Strict
/// improvement only, so ties keep the earliest square in scan order.
pub(crate) fn best_greedy(board: &Board, player: Player, moves: &[usize]) -> usize {
    let mut best_move = moves[0];
    let mut best_flips = 0u32;

    for &mv in moves {
        let flips = board.flips_for(mv, player).count_ones();
        if flips > best_flips {
            best_flips = flips;
            best_move = mv;
        }
    }

    best_move
}

/// Minimax tier root: maximizes over the agent's candidate moves, searching
/// each child at `depth - 1` with the opponent to move. Alpha tightens
/// after every candidate so later siblings inherit the bound; ties keep the
/// earliest square.
pub(crate) fn best_minimax(board: &Board, player: Player, moves: &[usize], depth: u8) -> usize {
    let mut best_move = moves[0];
    let mut best_score = MIN_SCORE;
    let mut alpha = MIN_SCORE;

    for &mv in moves {
        let mut next = *board;
        let _ = next.place(mv, player);
        let score = minimax(&next, player, depth.saturating_sub(1), alpha, MAX_SCORE, false);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        alpha = alpha.max(score);
    }

    best_move
}

/// Depth-bounded minimax with alpha-beta pruning. `maximizing` plies play
/// `agent`'s color, minimizing plies the opponent's. Every branch explores
/// its own copy of the board; `Board` is two words, so copying is cheaper
/// than apply/undo here.
fn minimax(
    board: &Board,
    agent: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if depth == 0 || board.is_terminal() {
        return evaluator::evaluate(board, agent);
    }

    let to_move = if maximizing { agent } else { agent.opponent() };
    let legal = board.legal_moves(to_move);
    if legal == 0 {
        // A stuck player passes: the ply still burns one depth unit,
        // mirroring the real game's turn rule.
        return minimax(board, agent, depth - 1, alpha, beta, !maximizing);
    }

    if maximizing {
        let mut best = MIN_SCORE;
        for mv in bitboard_to_positions(legal) {
            let mut next = *board;
            let _ = next.place(mv, to_move);
            let score = minimax(&next, agent, depth - 1, alpha, beta, false);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = MAX_SCORE;
        for mv in bitboard_to_positions(legal) {
            let mut next = *board;
            let _ = next.place(mv, to_move);
            let score = minimax(&next, agent, depth - 1, alpha, beta, true);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Expands a legal-move mask into square indices, ascending (row-major).
pub(crate) fn bitboard_to_positions(mut mask: u64) -> Vec<usize> {
    let mut out = Vec::new();
    while mask != 0 {
        let mv = mask.trailing_zeros() as usize;
        out.push(mv);
        mask &= mask - 1;
    }
    out
}
